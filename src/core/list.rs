//! Statically dispatched stage lists.
//!
//! A machine's stages are stored as a tuple. Each tuple arity gets a
//! generated [`StageList`] implementation whose index-based methods compile
//! down to a `match` over the tuple fields, so dispatch needs no vtable and
//! no allocation.
//!
//! The unit tuple has no implementation, which makes an empty machine a
//! compile error:
//!
//! ```rust,compile_fail
//! use scoro::Machine;
//!
//! let _empty = Machine::new(());
//! ```

use crate::core::outcome::StageOutcome;
use crate::core::stage::Stage;
use std::time::Duration;

/// Ordered, fixed-length sequence of stages addressed by index.
///
/// Implemented for tuples of one to twelve [`Stage`]s, and for
/// [`DynStages`](crate::builder::DynStages) when the list is assembled at
/// runtime. Index-based methods return `None` for an index past the end.
pub trait StageList {
    /// Number of stages. Never zero.
    fn len(&self) -> usize;

    /// Always `false` for a well-formed list.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Poll the stage at `index`.
    fn step_at(&mut self, index: usize) -> Option<StageOutcome>;

    /// Reset every stage, in order.
    fn reset_all(&mut self);

    fn name_at(&self, index: usize) -> Option<&str>;

    fn poll_hint_at(&self, index: usize) -> Option<Duration>;
}

macro_rules! impl_stage_list {
    ($len:expr; $($idx:tt => $ty:ident),+ $(,)?) => {
        impl<$($ty: Stage),+> StageList for ($($ty,)+) {
            #[inline]
            fn len(&self) -> usize {
                $len
            }

            #[inline]
            fn step_at(&mut self, index: usize) -> Option<StageOutcome> {
                match index {
                    $($idx => Some(self.$idx.step()),)+
                    _ => None,
                }
            }

            fn reset_all(&mut self) {
                $(self.$idx.reset();)+
            }

            fn name_at(&self, index: usize) -> Option<&str> {
                match index {
                    $($idx => Some(self.$idx.name()),)+
                    _ => None,
                }
            }

            fn poll_hint_at(&self, index: usize) -> Option<Duration> {
                match index {
                    $($idx => self.$idx.poll_hint(),)+
                    _ => None,
                }
            }
        }
    };
}

impl_stage_list!(1; 0 => A);
impl_stage_list!(2; 0 => A, 1 => B);
impl_stage_list!(3; 0 => A, 1 => B, 2 => C);
impl_stage_list!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_stage_list!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_stage_list!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_stage_list!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_stage_list!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
impl_stage_list!(9; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I);
impl_stage_list!(10; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J);
impl_stage_list!(11; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K);
impl_stage_list!(12; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K, 11 => L);
