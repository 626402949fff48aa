//! Macros for ergonomic stage definitions.

/// Define a zero-sized stage that runs a block once and completes.
///
/// The generated stage has no state, so its reset is a no-op. Its name is the
/// struct name.
///
/// # Example
///
/// ```
/// use scoro::core::MachineOutcome;
/// use scoro::{oneshot_stage, Machine};
///
/// oneshot_stage! {
///     /// Emits a greeting.
///     pub struct Greet => {
///         println!("hello");
///     }
/// }
///
/// let mut machine = Machine::new((Greet, Greet));
/// assert_eq!(machine.step(), MachineOutcome::Finished);
/// ```
#[macro_export]
macro_rules! oneshot_stage {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $body:block
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::core::Stage for $name {
            fn step(&mut self) -> $crate::core::StageOutcome {
                $body
                $crate::core::StageOutcome::Complete
            }

            fn reset(&mut self) {}

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };
}
