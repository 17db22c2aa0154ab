/// Helper macro to implement [FromInput][crate::input::FromInput] for a type
/// by converting it from something which can already be parsed.
///
/// If the conversion errors, the input is rewound and the error is reported as
/// [ErrorKind::Custom][crate::input::ErrorKind::Custom] spanning the parsed
/// value.
///
/// # Examples
///
/// ```
/// use lib::{IStr, Split};
///
/// struct Span {
///     start: u8,
///     end: u8,
/// }
///
/// lib::from_input! {
///     |Split(start, end): Split<'-', u8>| -> Span {
///         Ok(Span { start, end })
///     }
/// }
///
/// let mut input = IStr::new(b"3-7", 0);
/// let span = input.complete::<Span>()?;
/// assert_eq!((span.start, span.end), (3, 7));
/// # Ok::<_, lib::ParseError>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($($pat:tt)*))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($($pat)*))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl<'a> $crate::input::FromInput<'a> for $out {
            #[inline]
            fn error_kind() -> $crate::input::ErrorKind {
                <$ty as $crate::input::FromInput<'a>>::error_kind()
            }

            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr<'a>,
            ) -> core::result::Result<Option<Self>, $crate::input::ParseError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput<'a>>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(error) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::ParseError::new(
                            span,
                            $crate::input::ErrorKind::Custom(error),
                        ))
                    }
                }
            }
        }
    };
}
