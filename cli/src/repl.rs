use colored::Colorize;
use quill_driver::{Conf, Interpreter, Result};
use quill_dynamics::ProgKont;
use quill_syntax::{Expr, Formatter, Seq, Ugly};
use std::io::{BufRead, Write};

pub enum Control {
    Continue,
    Quit,
}

/// A line REPL whose definitions persist from one line to the next.
pub struct Repl {
    pub interp: Interpreter,
}

impl Repl {
    pub fn new(conf: Conf) -> Self {
        Repl { interp: Interpreter::new(conf) }
    }

    /// Handle one line, writing everything it shows to `out`.
    pub fn handle(&mut self, line: &str, out: &mut dyn Write) -> Result<Control> {
        let f = Formatter::new();
        let line = line.trim();
        match line {
            | "" => {}
            | ":quit" | ":q" => return Ok(Control::Quit),
            | ":env" => {
                let env = &self.interp.env;
                for name in env.names() {
                    writeln!(out, "{} = {}", name, env.get(&name)?.ugly(&f))?;
                }
            }
            | _ if line.starts_with(":ast") => {
                let expr = self.interp.parse(None, &line[":ast".len()..])?;
                // the top level is always a sequence; a lone expression prints alone
                match expr.as_ref() {
                    | Expr::Seq(Seq(exprs)) if exprs.len() == 1 => {
                        writeln!(out, "{}", exprs[0].ugly(&f))?
                    }
                    | _ => writeln!(out, "{}", expr.ugly(&f))?,
                }
            }
            | _ if line.starts_with(':') => {
                writeln!(out, "unknown command `{}`; try :env, :ast or :quit", line)?
            }
            | _ => match self.interp.run_source(None, line, out)? {
                | ProgKont::Ret(value) => writeln!(out, "{}", value.ugly(&f))?,
                | ProgKont::Halt => writeln!(out, "halted")?,
            },
        }
        Ok(Control::Continue)
    }

    pub fn launch(&mut self) -> std::io::Result<()> {
        println!("quill v{}", env!("CARGO_PKG_VERSION"));
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        loop {
            print!("> ");
            stdout.flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            match self.handle(&line, &mut stdout) {
                | Ok(Control::Continue) => {}
                | Ok(Control::Quit) => break,
                | Err(err) => eprintln!("{}: {}", "error".red().bold(), err),
            }
        }
        Ok(())
    }
}
