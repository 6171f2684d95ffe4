use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::builtin::Builtin,
        value::core::{FunctionValue, Value},
    },
};

/// A non-local exit raised during evaluation.
///
/// Either a `return` unwinding to the nearest function boundary, or a
/// runtime error aborting the whole program. Both short-circuit every
/// enclosing block via `?`; only `Return` is caught again, either at the
/// function call that entered the body or by [`Context::eval_program`] for a
/// top-level `return`. Neither form is ever observable by the evaluated
/// program itself.
#[derive(Debug)]
pub enum Unwind {
    /// A `return` carrying its value to the enclosing function boundary.
    Return(Value),
    /// A runtime error; surfaces as the result of the whole evaluation.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Unwind`] describing why evaluation of the enclosing block cannot
/// continue.
pub type EvalResult<T> = Result<T, Unwind>;

/// Stores the runtime evaluation context.
///
/// This struct owns the global environment all top-level bindings live in.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating programs. Bindings
/// accumulate across [`Context::eval_program`] calls, so a host can feed it
/// one source fragment after another.
pub struct Context {
    globals: EnvRef,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty global environment.
    #[must_use]
    pub fn new() -> Self {
        Self { globals: Environment::root() }
    }

    /// Evaluates a whole program against the global environment.
    ///
    /// Statements run in order; the program's value is the last statement's
    /// value. A top-level `return` stops execution early and its value
    /// becomes the program's value. The first runtime error stops execution
    /// and is returned as the error.
    ///
    /// # Parameters
    /// - `program`: The parsed program.
    ///
    /// # Returns
    /// The final value, or the runtime error that stopped evaluation.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn eval_program(&self, program: &Program) -> Result<Value, RuntimeError> {
        let mut result = Value::Null;

        for statement in &program.statements {
            result = match self.eval_statement(statement, &self.globals) {
                Ok(value) => value,
                Err(Unwind::Return(value)) => return Ok(value),
                Err(Unwind::Error(error)) => return Err(error),
            };
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// - `let` evaluates its value and binds it in the current environment;
    ///   the statement itself yields `null`.
    /// - `return` evaluates its value and raises [`Unwind::Return`].
    /// - An expression statement yields its expression's value.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: The environment bindings resolve against.
    pub fn eval_statement(&self, statement: &Statement, env: &EnvRef) -> EvalResult<Value> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().define(name.clone(), value);
                Ok(Value::Null)
            },
            Statement::Return { value, .. } => {
                let value = self.eval(value, env)?;
                Err(Unwind::Return(value))
            },
            Statement::Expression { expr, .. } => self.eval(expr, env),
        }
    }

    /// Evaluates the statements of a block in order.
    ///
    /// The block's value is its last statement's value, or `null` for an
    /// empty block. Blocks do not introduce a scope and do not catch
    /// unwinding: a `return` or error inside passes through untouched, which
    /// is what lets `return` escape arbitrarily nested blocks in one go.
    pub fn eval_block(&self, block: &Block, env: &EnvRef) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on expression variant: literals,
    /// identifiers, unary and binary operations, conditionals, collections,
    /// index accesses, function literals and calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The environment bindings resolve against.
    ///
    /// # Returns
    /// The computed [`Value`] wrapped in `EvalResult`.
    pub fn eval(&self, expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
        match expr {
            Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::from(value.as_str())),
            Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
            Expr::Identifier { name, line } => Self::eval_identifier(name, *line, env),
            Expr::UnaryOp { op, operand, line } => {
                let value = self.eval(operand, env)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::If { condition,
                       consequence,
                       alternative,
                       .. } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements, env),
            Expr::HashLiteral { pairs, .. } => self.eval_hash_literal(pairs, env),
            Expr::Index { object, index, line } => {
                let object = self.eval(object, env)?;
                let index = self.eval(index, env)?;
                Self::eval_index(&object, &index, *line)
            },
            Expr::FunctionLiteral { parameters, body, .. } => {
                Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                           body:       body.clone(),
                                                           env:        Rc::clone(env), })))
            },
            Expr::Call { callee, arguments, line } => self.eval_call(callee, arguments, *line, env),
        }
    }

    /// Resolves a name.
    ///
    /// The environment chain is consulted first, then the builtin table, so
    /// user bindings shadow builtins of the same name.
    fn eval_identifier(name: &str, line: usize, env: &EnvRef) -> EvalResult<Value> {
        if let Some(value) = env.borrow().get(name) {
            return Ok(value);
        }
        if let Some(builtin) = Builtin::lookup(name) {
            return Ok(Value::Builtin(builtin));
        }

        Err(RuntimeError::IdentifierNotFound { name: name.to_string(),
                                               line }.into())
    }

    /// Evaluates a conditional expression.
    ///
    /// The condition is tested for truthiness: only `false` and `null` fail
    /// it. Without an `else`, a failed condition yields `null`.
    fn eval_if(&self,
               condition: &Expr,
               consequence: &Block,
               alternative: Option<&Block>,
               env: &EnvRef)
               -> EvalResult<Value> {
        let condition = self.eval(condition, env)?;

        if condition.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Value::Null)
        }
    }
}
