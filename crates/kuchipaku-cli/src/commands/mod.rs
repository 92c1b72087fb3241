pub mod config_ops;
pub mod encode_ops;
pub mod text_ops;

/// Unwrap a `Result`, or print the error and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;
