/// Declares a fieldless enum mirroring an SDK lookup table. Every variant
/// carries its wire value, a short name and a human readable description.
macro_rules! ssn_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => ($short:literal, $desc:literal),
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $name {
            /// Every entry of the table, in wire order
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub const fn from_raw(value: $repr) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)*
                    _ => None,
                }
            }

            pub const fn raw(self) -> $repr {
                self as $repr
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $short,)*
                }
            }

            pub const fn description(self) -> &'static str {
                match self {
                    $($name::$variant => $desc,)*
                }
            }
        }

        impl core::convert::TryFrom<$repr> for $name {
            type Error = $repr;

            fn try_from(value: $repr) -> Result<Self, Self::Error> {
                Self::from_raw(value).ok_or(value)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value.raw()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.description())
            }
        }
    };
}
