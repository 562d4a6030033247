//! Conditional class-list builder.
//!
//! ```ignore
//! let class = cx!("post", is_draft.then_some("draft"), "");
//! assert_eq!(class, "post");
//! ```

/// A value usable as one entry of a class list.
///
/// Empty strings, `None` and `false`-gated tokens are falsy and dropped.
pub trait ClassToken {
    fn as_class(&self) -> Option<&str>;
}

impl ClassToken for str {
    fn as_class(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }
}

impl ClassToken for String {
    fn as_class(&self) -> Option<&str> {
        self.as_str().as_class()
    }
}

impl<T: ClassToken + ?Sized> ClassToken for &T {
    fn as_class(&self) -> Option<&str> {
        (**self).as_class()
    }
}

impl<T: ClassToken> ClassToken for Option<T> {
    fn as_class(&self) -> Option<&str> {
        self.as_ref().and_then(ClassToken::as_class)
    }
}

/// Bare `false` marker. A `bool` never contributes a class on its own.
impl ClassToken for bool {
    fn as_class(&self) -> Option<&str> {
        None
    }
}

/// `(token, condition)`: the token only counts when `condition` holds.
impl<T: ClassToken> ClassToken for (T, bool) {
    fn as_class(&self) -> Option<&str> {
        if self.1 { self.0.as_class() } else { None }
    }
}

/// Join the truthy tokens with a single space, in input order.
///
/// Tokens are taken verbatim: no trimming, no whitespace collapsing.
pub fn cx<I>(tokens: I) -> String
where
    I: IntoIterator,
    I::Item: ClassToken,
{
    let mut out = String::new();
    for token in tokens {
        if let Some(class) = token.as_class() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
    }
    out
}

/// Variadic form of [`cx`] accepting mixed token types.
///
/// # Usage
/// ```ignore
/// cx!("a", None::<&str>, ("b", false), String::from("c"));
/// ```
#[macro_export]
macro_rules! cx {
    () => { ::std::string::String::new() };
    ($($token:expr),+ $(,)?) => {{
        let tokens: &[&dyn $crate::utils::class::ClassToken] = &[$(&$token),+];
        $crate::utils::class::cx(tokens.iter().copied())
    }};
}
