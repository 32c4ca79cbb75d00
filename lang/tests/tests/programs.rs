use quill_driver::DriverError;
use quill_dynamics::EvalError;
use quill_tests::{prog, prog_err};

prog!(sum, "0-sum");
prog!(let_block, "1-let");
prog!(call_cc_return, "2-callcc");
prog!(fib, "3-fib");
prog!(backtrack, "4-backtrack");
prog!(reentry, "5-reentry");
prog!(closures, "6-closures");
prog!(halt, "7-halt");

prog_err!(undefined, "e0-undefined", DriverError::EvalError(EvalError::UndefinedVariable(_)));
prog_err!(divide_by_zero, "e1-divide", DriverError::EvalError(EvalError::DivideByZero));
prog_err!(
    chained_assign,
    "e2-chained",
    DriverError::EvalError(EvalError::InvalidAssignmentTarget(_))
);
prog_err!(not_callable, "e3-not-callable", DriverError::EvalError(EvalError::NotCallable(_)));
prog_err!(syntax, "e4-syntax", DriverError::ParseError(_));
prog_err!(unknown_operator, "e5-operator", DriverError::ParseError(_));
