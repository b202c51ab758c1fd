//! Macros for ergonomic state label declaration.

/// Declare a unit-variant enum and implement `State` for it.
///
/// Each variant is named after itself unless a label is given with
/// `Variant => "label"`.
///
/// # Example
///
/// ```
/// use residue_fsm::core::State;
/// use residue_fsm::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Warmup => "warm-up",
///         Running,
///         Done,
///     }
/// }
///
/// assert_eq!(Phase::Warmup.name(), "warm-up");
/// assert_eq!(Phase::Running.name(), "Running");
/// assert_eq!(Phase::Done.to_string(), "Done");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
