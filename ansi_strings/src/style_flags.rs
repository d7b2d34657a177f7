// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, AddAssign};

/// The emphasis flags that can be applied to a piece of text. Each one is independent,
/// and they can be freely combined.
///
/// The struct uses a newtype pattern with `Option<T>` instead of `bool` for each flag,
/// so flags compose w/ the `+` operator.
///
/// ```
/// use r3bl_ansi_strings::{StyleFlags, style_flag::{Bold, Italic, Underline}};
///
/// let flags: StyleFlags = Bold + Italic;
/// let mut more = flags + Underline;
/// assert!(more.underline.is_some());
///
/// more.reset();
/// assert!(more.is_none());
/// ```
///
/// There is no per-flag "unset". Once a flag is on it stays on until the whole style is
/// reset.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct StyleFlags {
    pub bold: Option<style_flag::Bold>,
    pub faint: Option<style_flag::Faint>,
    pub italic: Option<style_flag::Italic>,
    pub underline: Option<style_flag::Underline>,
    pub blink: Option<style_flag::Blink>,
    pub rapid_blink: Option<style_flag::RapidBlink>,
    pub inverted: Option<style_flag::Inverted>,
    pub concealed: Option<style_flag::Concealed>,
    pub strikethrough: Option<style_flag::Strikethrough>,
}

impl StyleFlags {
    /// Returns `true` if no flag is set.
    #[must_use]
    pub fn is_none(&self) -> bool { *self == Self::default() }

    pub fn reset(&mut self) { *self = Self::default(); }
}

pub mod style_flag {
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Bold;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Faint;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Italic;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Underline;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Blink;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct RapidBlink;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Inverted;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Concealed;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Strikethrough;
}

impl Add for StyleFlags {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bold: self.bold.or(rhs.bold),
            faint: self.faint.or(rhs.faint),
            italic: self.italic.or(rhs.italic),
            underline: self.underline.or(rhs.underline),
            blink: self.blink.or(rhs.blink),
            rapid_blink: self.rapid_blink.or(rhs.rapid_blink),
            inverted: self.inverted.or(rhs.inverted),
            concealed: self.concealed.or(rhs.concealed),
            strikethrough: self.strikethrough.or(rhs.strikethrough),
        }
    }
}

impl AddAssign for StyleFlags {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

macro_rules! impl_from_and_add_for_flag {
    ($type:ty, $field:ident) => {
        // From<$type> for StyleFlags
        impl From<$type> for StyleFlags {
            fn from(val: $type) -> Self {
                StyleFlags {
                    $field: Some(val),
                    ..Default::default()
                }
            }
        }

        // StyleFlags + $type
        impl Add<$type> for StyleFlags {
            type Output = StyleFlags;
            fn add(mut self, rhs: $type) -> Self::Output {
                self.$field = Some(rhs);
                self
            }
        }

        // $type + StyleFlags
        impl Add<StyleFlags> for $type {
            type Output = StyleFlags;
            fn add(self, mut rhs: StyleFlags) -> Self::Output {
                rhs.$field = Some(self);
                rhs
            }
        }

        impl AddAssign<$type> for StyleFlags {
            fn add_assign(&mut self, rhs: $type) { self.$field = Some(rhs); }
        }
    };
}

#[allow(unused_macro_rules)]
macro_rules! define_flag_operations {
    // Done
    () => {};

    // Just one element left
    (($type:ty, $field:ident)) => {
        impl_from_and_add_for_flag!($type, $field);
    };

    // Multiple elements
    (($type:ty, $field:ident), $(($rest_type:ty, $rest_field:ident)),+) => {
        impl_from_and_add_for_flag!($type, $field);

        // $type + $other_type
        $(
            impl Add<$rest_type> for $type {
                type Output = StyleFlags;
                fn add(self, rhs: $rest_type) -> Self::Output {
                    StyleFlags::from(self) + StyleFlags::from(rhs)
                }
            }

            impl Add<$type> for $rest_type {
                type Output = StyleFlags;
                fn add(self, rhs: $type) -> Self::Output {
                    StyleFlags::from(self) + StyleFlags::from(rhs)
                }
            }
        )*

        // Recurse.
        define_flag_operations!($(($rest_type, $rest_field)),+);
    };
}

define_flag_operations!(
    (style_flag::Bold, bold),
    (style_flag::Faint, faint),
    (style_flag::Italic, italic),
    (style_flag::Underline, underline),
    (style_flag::Blink, blink),
    (style_flag::RapidBlink, rapid_blink),
    (style_flag::Inverted, inverted),
    (style_flag::Concealed, concealed),
    (style_flag::Strikethrough, strikethrough)
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{StyleFlags,
                style_flag::{Blink, Bold, Faint, Strikethrough, Underline}};

    #[test]
    fn default_is_none() {
        assert!(StyleFlags::default().is_none());
    }

    #[test]
    fn flags_compose_in_any_order() {
        let lhs = Bold + Underline + Blink;
        let rhs = Blink + (Underline + Bold);
        assert_eq!(lhs, rhs);
        assert!(lhs.bold.is_some());
        assert!(lhs.faint.is_none());
    }

    #[test]
    fn bold_and_faint_are_independent() {
        let only_faint = StyleFlags::from(Faint);
        assert!(only_faint.faint.is_some());
        assert!(only_faint.bold.is_none());
    }

    #[test]
    fn add_assign_and_reset() {
        let mut flags = StyleFlags::default();
        flags += Strikethrough;
        flags += StyleFlags::from(Bold);
        assert!(flags.strikethrough.is_some());
        assert!(flags.bold.is_some());

        flags.reset();
        assert!(flags.is_none());
    }
}
