use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::core::{Context, EvalResult},
        value::core::{HashPair, Value},
    },
};

impl Context {
    /// Evaluates an array literal.
    ///
    /// Elements are evaluated left to right; the first error becomes the
    /// result of the whole literal.
    pub fn eval_array_literal(&self, elements: &[Expr], env: &EnvRef) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());

        for element in elements {
            values.push(self.eval(element, env)?);
        }

        Ok(Value::from(values))
    }

    /// Evaluates a hash literal.
    ///
    /// Pairs are evaluated in source order, each key before its value. A key
    /// must be an integer, boolean or string; anything else raises an
    /// unusable-hash-key error. A key written twice keeps the later value.
    pub fn eval_hash_literal(&self, pairs: &[(Expr, Expr)], env: &EnvRef) -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = self.eval(key_expr, env)?;
            let hash_key = key.hash_key(key_expr.line_number())?;
            let value = self.eval(value_expr, env)?;

            map.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::Hash(Rc::new(map)))
    }

    /// Evaluates an index access on an already-evaluated collection.
    ///
    /// - Array with an integer index: the element, or `null` when the index
    ///   is negative or past the end. Out of bounds is not an error.
    /// - Hash with a hashable index: the value, or `null` when absent.
    /// - Anything else: an index-not-supported error.
    ///
    /// # Parameters
    /// - `object`: The collection being indexed.
    /// - `index`: The position or key.
    /// - `line`: Line number for error reporting.
    pub fn eval_index(object: &Value, index: &Value, line: usize) -> EvalResult<Value> {
        match (object, index) {
            (Value::Array(elements), Value::Integer(position)) => {
                Ok(usize::try_from(*position).ok()
                                             .and_then(|position| elements.get(position).cloned())
                                             .unwrap_or(Value::Null))
            },
            (Value::Hash(pairs), _) => {
                let key = index.hash_key(line)?;

                Ok(pairs.get(&key).map_or(Value::Null, |pair| pair.value.clone()))
            },
            _ => Err(RuntimeError::IndexNotSupported { kind: object.kind(),
                                                       line }.into()),
        }
    }
}
