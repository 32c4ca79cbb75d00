use crate::{err::*, syntax::*};

/// Combine two already evaluated operands.
pub fn apply(op: BinOp, a: &Value, b: &Value) -> Result<Value> {
    let value = match op {
        | BinOp::Add => (num(op, a)? + num(op, b)?).into(),
        | BinOp::Sub => (num(op, a)? - num(op, b)?).into(),
        | BinOp::Mul => (num(op, a)? * num(op, b)?).into(),
        | BinOp::Div => (num(op, a)? / divisor(op, b)?).into(),
        | BinOp::Rem => (num(op, a)? % divisor(op, b)?).into(),
        | BinOp::Lt => (num(op, a)? < num(op, b)?).into(),
        | BinOp::Gt => (num(op, a)? > num(op, b)?).into(),
        | BinOp::Le => (num(op, a)? <= num(op, b)?).into(),
        | BinOp::Ge => (num(op, a)? >= num(op, b)?).into(),
        | BinOp::Eq => a.strict_eq(b).into(),
        | BinOp::Ne => (!a.strict_eq(b)).into(),
        | BinOp::And => match a {
            | Value::Boolean(false) => a.clone(),
            | _ => b.clone(),
        },
        | BinOp::Or => match a {
            | Value::Boolean(false) => b.clone(),
            | _ => a.clone(),
        },
    };
    Ok(value)
}

fn num(op: BinOp, value: &Value) -> Result<f64> {
    match value {
        | Value::Number(n) => Ok(*n),
        | other => Err(EvalError::TypeMismatch {
            op,
            expected: "number",
            found: format!("{} {}", other.kind(), other),
        }),
    }
}

fn divisor(op: BinOp, value: &Value) -> Result<f64> {
    match num(op, value)? {
        | n if n == 0.0 => Err(EvalError::DivideByZero),
        | n => Ok(n),
    }
}
