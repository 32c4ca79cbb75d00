use super::{
    err::{ParseError, Result, SyntaxError},
    lexer::{unescape, Lexer, Tok},
};
use quill_syntax::*;
use quill_utils::span::{FileInfo, Sp, Span};
use std::{path::PathBuf, rc::Rc, sync::Arc};

/// Binding strength of each infix spelling; all of them associate to the left.
fn precedence(op: &str) -> Option<u8> {
    let prec = match op {
        | "=" => 1,
        | "||" => 2,
        | "&&" => 3,
        | "<" | ">" | "<=" | ">=" | "==" | "!=" => 7,
        | "+" | "-" => 10,
        | "*" | "/" | "%" => 20,
        | _ => None?,
    };
    Some(prec)
}

/// Parse a whole program: `;`-separated expressions forming one sequence.
pub fn parse(source: &str, path: Option<PathBuf>) -> Result<RcExpr> {
    let info = FileInfo::new(source, path.map(Arc::new));
    Parser::new(source, info)?.parse_toplevel()
}

pub struct Parser<'src> {
    toks: Vec<Sp<Tok<'src>>>,
    pos: usize,
    info: FileInfo,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, info: FileInfo) -> Result<Self> {
        let mut toks = Vec::new();
        for tok in Lexer::new(source) {
            match tok {
                | Ok(tok) => toks.push(tok),
                | Err(bad) => {
                    let error = SyntaxError::InvalidToken(bad.text.to_string());
                    return Err(ParseError { error, span: bad.span, file_info: info });
                }
            }
        }
        Ok(Parser { toks, pos: 0, info })
    }

    /* --------------------------------- Cursor --------------------------------- */

    fn peek(&self) -> Option<&Tok<'src>> {
        self.toks.get(self.pos).map(Sp::inner_ref)
    }
    fn next(&mut self) -> Option<Sp<Tok<'src>>> {
        let tok = self.toks.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }
    fn eof(&self) -> bool {
        self.pos >= self.toks.len()
    }
    fn is(&self, tok: &Tok<'src>) -> bool {
        self.peek() == Some(tok)
    }
    fn here(&self) -> Span {
        match self.toks.get(self.pos) {
            | Some(tok) => tok.info,
            | None => {
                let end = self.toks.last().map(|tok| tok.info.end()).unwrap_or_default();
                Span::new(end, end)
            }
        }
    }
    fn fail<T>(&self, error: SyntaxError, span: Span) -> Result<T> {
        Err(ParseError { error, span, file_info: self.info.clone() })
    }
    fn unexpected<T>(&self, expected: impl Into<String>) -> Result<T> {
        let expected = expected.into();
        match self.toks.get(self.pos) {
            | Some(tok) => {
                let found = tok.inner.to_string();
                self.fail(SyntaxError::UnrecognizedToken { found, expected }, tok.info)
            }
            | None => self.fail(SyntaxError::UnrecognizedEof { expected }, self.here()),
        }
    }
    fn skip(&mut self, tok: Tok<'static>) -> Result<()> {
        if self.is(&tok) {
            self.pos += 1;
            Ok(())
        } else {
            self.unexpected(format!("`{}`", tok))
        }
    }

    /// `start item sep item sep ... end`, tolerating a trailing separator
    fn delimited<T>(
        &mut self, start: Tok<'static>, end: Tok<'static>, sep: Tok<'static>,
        mut item: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut first = true;
        self.skip(start)?;
        while !self.eof() {
            if self.is(&end) {
                break;
            }
            if first {
                first = false;
            } else {
                self.skip(sep.clone())?;
            }
            if self.is(&end) {
                break;
            }
            items.push(item(self)?);
        }
        self.skip(end)?;
        Ok(items)
    }

    /* ------------------------------- Productions ------------------------------ */

    pub fn parse_toplevel(mut self) -> Result<RcExpr> {
        let mut prog = Vec::new();
        while !self.eof() {
            prog.push(self.parse_expression()?);
            if !self.eof() {
                self.skip(Tok::Semicolon)?;
            }
        }
        Ok(Expr::seq(prog))
    }

    fn parse_expression(&mut self) -> Result<RcExpr> {
        let atom = self.parse_atom()?;
        let expr = self.maybe_binary(atom, 0)?;
        self.maybe_call(expr)
    }

    fn maybe_call(&mut self, mut expr: RcExpr) -> Result<RcExpr> {
        while self.is(&Tok::ParenOpen) {
            let args = self.delimited(
                Tok::ParenOpen,
                Tok::ParenClose,
                Tok::Comma,
                Self::parse_expression,
            )?;
            expr = Expr::call(expr, args);
        }
        Ok(expr)
    }

    /// Operators binding tighter than `my_prec` recurse into the right operand;
    /// the left-associative chain at this level is folded in a loop.
    fn maybe_binary(&mut self, mut lhs: RcExpr, my_prec: u8) -> Result<RcExpr> {
        loop {
            let Some(&Tok::Op(op)) = self.peek() else { return Ok(lhs) };
            let span = self.here();
            let Some(his_prec) = precedence(op) else {
                let error = AstError::UnknownOperator(op.to_string()).into();
                return self.fail(error, span);
            };
            if his_prec <= my_prec {
                return Ok(lhs);
            }
            self.pos += 1;
            let atom = self.parse_atom()?;
            let rhs = self.maybe_binary(atom, his_prec)?;
            lhs = match op {
                | "=" => Expr::assign(lhs, rhs),
                | _ => match op.parse() {
                    | Ok(op) => Expr::binary(op, lhs, rhs),
                    | Err(err) => self.fail(SyntaxError::Ast(err), span)?,
                },
            };
        }
    }

    fn parse_atom(&mut self) -> Result<RcExpr> {
        let atom = match self.peek() {
            | Some(Tok::ParenOpen) => {
                self.pos += 1;
                let expr = self.parse_expression()?;
                self.skip(Tok::ParenClose)?;
                expr
            }
            | Some(Tok::BraceOpen) => self.parse_prog()?,
            | Some(Tok::If) => self.parse_if()?,
            | Some(Tok::True) => {
                self.pos += 1;
                Expr::bool(true)
            }
            | Some(Tok::False) => {
                self.pos += 1;
                Expr::bool(false)
            }
            | Some(Tok::Lambda) => {
                self.pos += 1;
                self.parse_lambda()?
            }
            | Some(Tok::Let) => self.parse_let()?,
            | Some(Tok::Ident(_) | Tok::NumLit(_) | Tok::StrLit(_)) => self.parse_leaf()?,
            | _ => self.unexpected("an expression")?,
        };
        self.maybe_call(atom)
    }

    fn parse_leaf(&mut self) -> Result<RcExpr> {
        let Some(Sp { inner: tok, info: span }) = self.next() else {
            return self.unexpected("an expression");
        };
        match tok {
            | Tok::Ident(name) => Ok(Expr::var(name)),
            | Tok::NumLit(lit) => match lit.parse::<f64>() {
                | Ok(n) => Ok(Expr::num(n)),
                | Err(_) => self.fail(SyntaxError::InvalidNumber(lit.to_string()), span),
            },
            | Tok::StrLit(lit) => Ok(Expr::str(&unescape(lit))),
            | _ => {
                self.pos -= 1;
                self.unexpected("an expression")
            }
        }
    }

    fn parse_varname(&mut self) -> Result<VarName> {
        match self.peek() {
            | Some(&Tok::Ident(name)) => {
                self.pos += 1;
                Ok(VarName::from(name))
            }
            | _ => self.unexpected("a variable name"),
        }
    }

    /// `if c then a else b`, where `then` may be dropped before a block
    fn parse_if(&mut self) -> Result<RcExpr> {
        self.skip(Tok::If)?;
        let cond = self.parse_expression()?;
        if !self.is(&Tok::BraceOpen) {
            self.skip(Tok::Then)?;
        }
        let then = self.parse_expression()?;
        let alt = if self.is(&Tok::Else) {
            self.pos += 1;
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(Expr::if_then(cond, then, alt))
    }

    /// after the keyword: `name? (x, y) body`
    fn parse_lambda(&mut self) -> Result<RcExpr> {
        let name = match self.peek() {
            | Some(Tok::Ident(_)) => Some(self.parse_varname()?),
            | _ => None,
        };
        let params =
            self.delimited(Tok::ParenOpen, Tok::ParenClose, Tok::Comma, Self::parse_varname)?;
        let body = self.parse_expression()?;
        Ok(Rc::new(Lambda { name, params: params.into(), body }.into()))
    }

    /// `let (x = a, y) { body }`
    fn parse_let(&mut self) -> Result<RcExpr> {
        self.skip(Tok::Let)?;
        let bindings =
            self.delimited(Tok::ParenOpen, Tok::ParenClose, Tok::Comma, Self::parse_binding)?;
        let body = self.parse_prog()?;
        Ok(Rc::new(Let { bindings: bindings.into(), body }.into()))
    }

    fn parse_binding(&mut self) -> Result<LetBinding> {
        let name = self.parse_varname()?;
        match self.peek() {
            | Some(Tok::Op("=")) => {
                self.pos += 1;
                let atom = self.parse_atom()?;
                let init = self.maybe_binary(atom, 0)?;
                Ok(LetBinding { name, init: Some(init) })
            }
            | Some(Tok::Op(_)) => self.unexpected("`=`"),
            | _ => Ok(LetBinding { name, init: None }),
        }
    }

    /// `{ a; b }`; an empty block is `false` and a single expression stands alone
    fn parse_prog(&mut self) -> Result<RcExpr> {
        let mut prog = self.delimited(
            Tok::BraceOpen,
            Tok::BraceClose,
            Tok::Semicolon,
            Self::parse_expression,
        )?;
        Ok(match prog.len() {
            | 0 => Expr::bool(false),
            | 1 => prog.remove(0),
            | _ => Expr::seq(prog),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(src: &str) -> RcExpr {
        match parse(src, None) {
            | Ok(expr) => expr,
            | Err(err) => panic!("{}", err),
        }
    }

    fn num(n: f64) -> RcExpr {
        Expr::num(n)
    }
    fn var(name: &str) -> RcExpr {
        Expr::var(name)
    }
    fn bin(op: BinOp, lhs: RcExpr, rhs: RcExpr) -> RcExpr {
        Expr::binary(op, lhs, rhs)
    }

    #[test]
    fn parses_definition_and_call() {
        let expected = Expr::seq([
            Expr::assign(
                var("sum"),
                Expr::lambda(None, ["x", "y"], bin(BinOp::Add, var("x"), var("y"))),
            ),
            Expr::call(var("sum"), [num(2.0), num(3.0)]),
        ]);
        assert_eq!(p("sum = lambda(x, y) x + y; sum(2, 3);"), expected);
    }

    #[test]
    fn follows_precedence_table() {
        let expected = Expr::seq([bin(
            BinOp::Or,
            bin(BinOp::Lt, bin(BinOp::Add, num(1.0), bin(BinOp::Mul, num(2.0), num(3.0))), num(4.0)),
            bin(BinOp::And, Expr::bool(true), Expr::bool(false)),
        )]);
        assert_eq!(p("1 + 2 * 3 < 4 || true && false"), expected);
        // left associative
        let expected = Expr::seq([bin(BinOp::Sub, bin(BinOp::Sub, num(1.0), num(2.0)), num(3.0))]);
        assert_eq!(p("1 - 2 - 3"), expected);
    }

    #[test]
    fn long_operator_chains_parse_iteratively() {
        let src = vec!["1"; 20_000].join(" + ");
        let expr = p(&src);
        let Expr::Seq(Seq(exprs)) = expr.as_ref() else { panic!("expected a sequence") };
        let (mut node, mut terms) = (exprs[0].clone(), 1);
        while let Expr::Binary(Binary { op: BinOp::Add, lhs, rhs }) = node.clone().as_ref() {
            assert_eq!(rhs, &num(1.0));
            node = lhs.clone();
            terms += 1;
        }
        assert_eq!((node, terms), (num(1.0), 20_000));
    }

    #[test]
    fn chained_assignment_groups_to_the_left() {
        let expected =
            Expr::seq([Expr::assign(Expr::assign(var("a"), var("b")), num(1.0))]);
        assert_eq!(p("a = b = 1"), expected);
    }

    #[test]
    fn curried_calls_chain() {
        let expected = Expr::seq([Expr::call(
            Expr::call(Expr::call(var("f"), [num(1.0)]), [num(2.0)]),
            [num(3.0)],
        )]);
        assert_eq!(p("f(1)(2)(3)"), expected);
    }

    #[test]
    fn parses_let_blocks() {
        let expected = Expr::seq([Expr::let_in(
            [
                ("a", Some(num(10.0))),
                ("b", Some(bin(BinOp::Add, var("a"), num(5.0)))),
                ("d", None),
            ],
            Expr::seq([
                Expr::assign(var("d"), bin(BinOp::Mul, var("b"), num(2.0))),
                var("d"),
            ]),
        )]);
        assert_eq!(p("let (a = 10, b = a + 5, d) { d = b * 2; d; };"), expected);
    }

    #[test]
    fn parses_blocks_and_conditionals() {
        let expected = Expr::seq([
            Expr::if_then(var("c"), num(1.0), Some(Expr::str("no"))),
            Expr::if_then(var("c"), Expr::bool(false), None),
            Expr::if_then(var("c"), var("x"), None),
        ]);
        assert_eq!(p("if c then 1 else \"no\"; if c {}; if c { x; }"), expected);
    }

    #[test]
    fn parses_named_lambda() {
        let expected = Expr::seq([Expr::lambda(
            Some(VarName::from("loop")),
            ["n"],
            Expr::call(var("loop"), [var("n")]),
        )]);
        assert_eq!(p("λ loop(n) loop(n)"), expected);
    }

    #[test]
    fn empty_program_is_empty_sequence() {
        assert_eq!(p("# nothing here\n"), Expr::seq([]));
    }

    #[test]
    fn reports_position_of_unexpected_token() {
        let err = parse("x = 1;\ny = )", None).unwrap_err();
        assert!(matches!(err.error, SyntaxError::UnrecognizedToken { ref found, .. } if found == ")"));
        assert_eq!(err.file_info.trans_span2(err.span.start()).to_string(), "2:5");
    }

    #[test]
    fn reports_unknown_operator() {
        let err = parse("2 ** 3", None).unwrap_err();
        assert!(matches!(err.error, SyntaxError::Ast(AstError::UnknownOperator(ref op)) if op == "**"));
    }

    #[test]
    fn reports_missing_separator_and_eof() {
        let err = parse("a b", None).unwrap_err();
        assert!(matches!(err.error, SyntaxError::UnrecognizedToken { .. }));
        let err = parse("f(1, 2", None).unwrap_err();
        assert!(matches!(err.error, SyntaxError::UnrecognizedEof { .. }));
    }

    #[test]
    fn printed_programs_parse_back() {
        let src = "fib = lambda(n) if n < 2 then n else fib(n - 1) + fib(n - 2); \
                   let (a = \"q\\\"uote\", b) { b = a == a; b || false }; fib(10)";
        let expr = p(src);
        let printed = expr.ugly(&Formatter::new());
        // the printer wraps the program in braces, which the parser unwraps into a block
        assert_eq!(p(&printed), Expr::seq([expr]));
    }
}
