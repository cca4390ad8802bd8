use core::fmt::{self, Display, Formatter};

pub const INCLUDE_FUNCTION_NAME: bool = cfg!(feature = "function-name");
pub const INCLUDE_FILE_NAME: bool = cfg!(feature = "file-name");
pub const INCLUDE_LINE_NUMBER: bool = cfg!(feature = "line-number");

/// Call-site prefix written in front of every macro-emitted message.
///
/// Which fields appear is fixed at build time by the `function-name`,
/// `file-name` and `line-number` features; disabled fields cost nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context {
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl Context {
    #[inline]
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    fn write_fields(
        &self,
        f: &mut Formatter<'_>,
        function: bool,
        file: bool,
        line: bool,
    ) -> fmt::Result {
        if function {
            write!(f, "{}: ", self.function)?;
        }
        if file {
            write!(f, "in [{}] ", self.file)?;
        }
        if line {
            write!(f, "(l. {}) ", self.line)?;
        }
        Ok(())
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_fields(f, INCLUDE_FUNCTION_NAME, INCLUDE_FILE_NAME, INCLUDE_LINE_NUMBER)
    }
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    core::any::type_name::<T>()
}

/// Reduces the type name of an item nested in a function to that function's
/// bare name. Closure and async frames are skipped.
#[doc(hidden)]
pub fn enclosing_function(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(at) => &path[at + 2..],
        None => path,
    }
}

/// Name of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        $crate::context::enclosing_function($crate::context::type_name_of(__here))
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __context {
    () => {
        $crate::context::Context::new($crate::__function_name!(), file!(), line!())
    };
}
