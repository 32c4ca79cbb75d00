pub mod utils {
    use colored::Colorize;
    use quill_driver::{DriverError, Interpreter};
    use quill_dynamics::ProgKont;
    use std::path::{Path, PathBuf};

    /// `lang/tests/programs/<name>.ql`
    pub fn program(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("programs").join(format!("{}.ql", name))
    }

    fn run(path: &Path) -> (Result<ProgKont, DriverError>, String) {
        let mut interp = Interpreter::default();
        let mut out = Vec::new();
        let res = interp.run_file(path, &mut out);
        (res, String::from_utf8_lossy(&out).into_owned())
    }

    /// Run a program and compare what it printed with the `.out` file beside it.
    pub fn wrapper_program(path: PathBuf) {
        let (res, out) = run(&path);
        if let Err(err) = res {
            eprintln!("{}: {}", "error".red(), err);
            panic!("Error running program `{}`", path.display());
        }
        let expected = std::fs::read_to_string(path.with_extension("out")).unwrap();
        pretty_assertions::assert_eq!(out, expected);
    }

    /// Run a program that is expected to fail and hand back its error.
    pub fn wrapper_program_err(path: PathBuf) -> DriverError {
        match run(&path) {
            | (Err(err), _) => err,
            | (Ok(_), out) => {
                eprintln!("{}", out);
                panic!("Program `{}` was expected to fail", path.display());
            }
        }
    }
}

#[macro_export]
macro_rules! prog {
    ($name:ident, $file:expr) => {
        #[test]
        fn $name() {
            $crate::utils::wrapper_program($crate::utils::program($file));
        }
    };
}

#[macro_export]
macro_rules! prog_err {
    ($name:ident, $file:expr, $err:pat) => {
        #[test]
        fn $name() {
            match $crate::utils::wrapper_program_err($crate::utils::program($file)) {
                | $err => {}
                | err => panic!("unexpected error: {:?}", err),
            }
        }
    };
}
