use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{Context, EvalResult, Unwind},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments left to right; the
    /// first error anywhere becomes the call's result and the callee is
    /// never applied.
    ///
    /// # Parameters
    /// - `callee`: The expression being called.
    /// - `arguments`: Argument expressions, unevaluated.
    /// - `line`: Line number for error reporting.
    /// - `env`: The caller's environment.
    pub fn eval_call(&self,
                     callee: &Expr,
                     arguments: &[Expr],
                     line: usize,
                     env: &EnvRef)
                     -> EvalResult<Value> {
        let callee = self.eval(callee, env)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument, env)?);
        }

        self.apply_function(&callee, &args, line)
    }

    /// Applies an already-evaluated callee to its argument values.
    ///
    /// For a user function, a fresh environment frame is chained onto the
    /// function's *captured* environment, not the caller's; that is what
    /// makes closures lexical. Parameters are bound positionally and
    /// leniently: extra arguments are dropped, missing parameters stay
    /// unbound. A `return` inside the body is caught here and becomes the
    /// call's value; otherwise the body's last value is.
    ///
    /// Builtins receive the argument values directly.
    ///
    /// # Parameters
    /// - `callee`: The value being called.
    /// - `args`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    pub fn apply_function(&self, callee: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => {
                let env = Environment::child(&function.env);
                for (parameter, argument) in function.parameters.iter().zip(args) {
                    env.borrow_mut().define(parameter.clone(), argument.clone());
                }

                match self.eval_block(&function.body, &env) {
                    Err(Unwind::Return(value)) => Ok(value),
                    result => result,
                }
            },
            Value::Builtin(builtin) => builtin.apply(args, line),
            _ => Err(RuntimeError::NotCallable { kind: callee.kind(),
                                                 line }.into()),
        }
    }
}
