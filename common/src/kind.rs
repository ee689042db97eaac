//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Variants are displayed, parsed and (de)serialized in `snake_case`, so the
/// textual form matches the one used in URLs and record files.
///
/// Crates invoking this macro must depend on `serde` and `strum`.
///
/// # Example
///
/// ```rust,ignore
/// use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            $crate::private::strum::IntoStaticStr,
            PartialEq,
            $crate::private::serde::Serialize,
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[serde(rename_all = "snake_case")]
        #[strum(serialize_all = "snake_case")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// All the variants, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }

            /// Returns the textual name of this value.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                self.into()
            }
        }
    };
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    define_kind! {
        #[doc = "Test kind."]
        enum Shape {
            #[doc = "Cube."]
            Cube = 1,

            #[doc = "Square pyramid."]
            SquarePyramid = 2,
        }
    }

    #[test]
    fn uses_snake_case() {
        assert_eq!(Shape::SquarePyramid.to_string(), "square_pyramid");
        assert_eq!(Shape::Cube.as_str(), "cube");
        assert_eq!(
            Shape::from_str("square_pyramid").unwrap(),
            Shape::SquarePyramid,
        );
        assert!(Shape::from_str("SquarePyramid").is_err());
        assert!(Shape::from_str("").is_err());
    }

    #[test]
    fn lists_all_variants() {
        assert_eq!(Shape::ALL, &[Shape::Cube, Shape::SquarePyramid]);
        assert_eq!(Shape::SquarePyramid.u8(), 2);
    }
}
