//! Compile-time unit-tagged length values.
//!
//! A [`Length`] is a floating-point magnitude tagged by a zero-sized
//! [`LengthUnit`] marker type carrying a rational scale to meters. All
//! unit conversion is resolved by the type system; mixing units without
//! going through the defined operators does not compile, and the
//! conversions themselves cost one multiply and one divide.
//!
//! # Design
//!
//! Units are marker types implementing [`LengthUnit`], the same shape as
//! a `std::ratio` tag: `1 unit = NUM/DEN meters`. Cross-unit arithmetic
//! always produces the LEFT operand's unit.
//!
//! There is deliberately no protection against mixing a `Length` with a
//! raw scalar through multiplication or division - scaling a length by a
//! dimensionless factor is well-formed. Adding a raw scalar to a length
//! requires wrapping it in the length's unit first.
//!
//! # Usage
//!
//! ```
//! use plinth_math::length::{Kilometer, Length, Meter, Meters};
//!
//! let run = Meters::new(1000.0);
//! let km: Length<f64, Kilometer> = run.convert();
//! assert!(km.equals(Length::<f64, Kilometer>::new(1.0)));
//!
//! // Left operand's unit wins.
//! let total = run + Length::<f64, Kilometer>::new(2.0);
//! assert_eq!(total.value, 3000.0);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use plinth_core::math::nearly_equal_tol;
use plinth_core::scalar::Float;

/// Trait for length unit marker types.
///
/// `1 unit = NUM/DEN meters`. Marker types are zero-sized; the ratio is
/// resolved entirely at compile time.
///
/// # Implementing Custom Units
///
/// ```
/// use plinth_math::length::{Length, LengthUnit};
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// pub struct Furlong;
///
/// impl LengthUnit for Furlong {
///     const NUM: i64 = 201168;
///     const DEN: i64 = 1000;
///     const SYMBOL: &'static str = "fur";
/// }
///
/// let l: Length<f64, Furlong> = Length::new(1.0);
/// assert!((l.to_meters() - 201.168).abs() < 1e-9);
/// ```
pub trait LengthUnit:
    Copy + Clone + Default + PartialEq + Send + Sync + fmt::Debug + 'static
{
    /// Numerator of the meters-per-unit ratio.
    const NUM: i64;

    /// Denominator of the meters-per-unit ratio.
    const DEN: i64;

    /// Short unit symbol for display.
    const SYMBOL: &'static str;
}

macro_rules! length_units {
    ($($(#[$meta:meta])* $name:ident / $alias:ident: $num:expr, $den:expr, $symbol:literal;)*) => {$(
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl LengthUnit for $name {
            const NUM: i64 = $num;
            const DEN: i64 = $den;
            const SYMBOL: &'static str = $symbol;
        }

        $(#[$meta])*
        pub type $alias = Length<f64, $name>;
    )*};
}

length_units! {
    /// 0.000000001 m
    Nanometer / Nanometers: 1, 1_000_000_000, "nm";
    /// 0.000001 m
    Micrometer / Micrometers: 1, 1_000_000, "um";
    /// 0.001 m
    Millimeter / Millimeters: 1, 1000, "mm";
    /// 0.01 m
    Centimeter / Centimeters: 1, 100, "cm";
    /// 0.1 m
    Decimeter / Decimeters: 1, 10, "dm";
    /// 1 m
    Meter / Meters: 1, 1, "m";
    /// 10 m
    Decameter / Decameters: 10, 1, "dam";
    /// 100 m
    Hectometer / Hectometers: 100, 1, "hm";
    /// 1000 m
    Kilometer / Kilometers: 1000, 1, "km";
    /// 1000000 m
    Megameter / Megameters: 1_000_000, 1, "Mm";
    /// 1000000000 m
    Gigameter / Gigameters: 1_000_000_000, 1, "Gm";
    /// 1609 m
    Mile / Miles: 1609, 1, "mi";
    /// 0.9144 m
    Yard / Yards: 1143, 1250, "yd";
    /// 9460730472580800 m
    Lightyear / Lightyears: 9_460_730_472_580_800, 1, "ly";
}

/// A length magnitude tagged with a compile-time unit.
///
/// Value-semantic: constructed from a raw scalar or converted from
/// another unit, no dynamic resource. The value type must be floating
/// point - integer lengths do not compile.
///
/// # Equality
///
/// `==` compares ratio-adjusted magnitudes exactly, across any pair of
/// units. Use [`Length::nearly_eq`] for tolerance-based comparison.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Length<T: Float, U: LengthUnit> {
    /// Raw magnitude in this length's unit.
    pub value: T,
    unit: PhantomData<U>,
}

/// Conversion factor from `Src` into `Dst` as an (numerator,
/// denominator) pair, applied multiply-then-divide to keep exact cases
/// exact (1000 m to km is 1000 * 1 / 1000 = 1, with no rounding).
#[inline]
fn factor<Src: LengthUnit, Dst: LengthUnit>() -> (f64, f64) {
    // i128 keeps the cross products exact beyond i64 range (lightyears
    // against nanometers overflows i64).
    let num = Src::NUM as i128 * Dst::DEN as i128;
    let den = Src::DEN as i128 * Dst::NUM as i128;
    (num as f64, den as f64)
}

impl<T: Float, U: LengthUnit> Length<T, U> {
    /// Zero length.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// Creates a length from a raw magnitude in this unit.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Largest representable magnitude of the value type.
    #[inline]
    pub const fn max_value() -> T {
        T::MAX
    }

    /// Most negative representable magnitude of the value type.
    #[inline]
    pub const fn min_value() -> T {
        T::MIN
    }

    /// Rescales into another unit.
    #[inline]
    pub fn convert<U2: LengthUnit>(self) -> Length<T, U2> {
        let (num, den) = factor::<U, U2>();
        Length::new(T::from_f64(self.value.to_f64() * num / den))
    }

    /// Casts the value type, keeping the unit.
    #[inline]
    pub fn cast<T2: Float>(self) -> Length<T2, U> {
        Length::new(T2::from_f64(self.value.to_f64()))
    }

    /// Magnitude expressed in meters.
    #[inline]
    pub fn to_meters(self) -> T {
        self.convert::<Meter>().value
    }

    /// Exact equality after converting `rhs` into this length's unit.
    #[inline]
    pub fn equals<U2: LengthUnit>(self, rhs: Length<T, U2>) -> bool {
        self.value == rhs.convert::<U>().value
    }

    /// Tolerance equality with the medium tolerance tier.
    ///
    /// `rhs` is converted into this length's unit before comparing, so
    /// the tolerance is expressed in this unit.
    #[inline]
    pub fn nearly_eq<U2: LengthUnit>(self, rhs: Length<T, U2>) -> bool {
        self.nearly_eq_tol(rhs, T::MEDIUM_TOLERANCE)
    }

    /// Tolerance equality with an explicit tolerance in this unit.
    #[inline]
    pub fn nearly_eq_tol<U2: LengthUnit>(self, rhs: Length<T, U2>, tolerance: T) -> bool {
        nearly_equal_tol(self.value, rhs.convert::<U>().value, tolerance)
    }
}

// Cross-unit arithmetic: the result always takes the LEFT operand's
// unit.

impl<T: Float, U: LengthUnit, U2: LengthUnit> Add<Length<T, U2>> for Length<T, U> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Length<T, U2>) -> Self {
        Self::new(self.value + rhs.convert::<U>().value)
    }
}

impl<T: Float, U: LengthUnit, U2: LengthUnit> Sub<Length<T, U2>> for Length<T, U> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Length<T, U2>) -> Self {
        Self::new(self.value - rhs.convert::<U>().value)
    }
}

impl<T: Float, U: LengthUnit, U2: LengthUnit> AddAssign<Length<T, U2>> for Length<T, U> {
    #[inline]
    fn add_assign(&mut self, rhs: Length<T, U2>) {
        self.value += rhs.convert::<U>().value;
    }
}

impl<T: Float, U: LengthUnit, U2: LengthUnit> SubAssign<Length<T, U2>> for Length<T, U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Length<T, U2>) {
        self.value -= rhs.convert::<U>().value;
    }
}

// Scaling by a dimensionless factor.

impl<T: Float, U: LengthUnit> Mul<T> for Length<T, U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<T: Float, U: LengthUnit> Div<T> for Length<T, U> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<T: Float, U: LengthUnit> MulAssign<T> for Length<T, U> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.value *= rhs;
    }
}

impl<T: Float, U: LengthUnit> DivAssign<T> for Length<T, U> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.value /= rhs;
    }
}

impl<T: Float, U: LengthUnit> Neg for Length<T, U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

macro_rules! impl_scalar_lhs_length {
    ($($t:ty),* $(,)?) => {$(
        impl<U: LengthUnit> Mul<Length<$t, U>> for $t {
            type Output = Length<$t, U>;

            #[inline]
            fn mul(self, rhs: Length<$t, U>) -> Length<$t, U> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_length!(f32, f64);

// Cross-unit comparisons via ratio-adjusted magnitude.

impl<T: Float, U: LengthUnit, U2: LengthUnit> PartialEq<Length<T, U2>> for Length<T, U> {
    #[inline]
    fn eq(&self, rhs: &Length<T, U2>) -> bool {
        self.equals(*rhs)
    }
}

impl<T: Float, U: LengthUnit, U2: LengthUnit> PartialOrd<Length<T, U2>> for Length<T, U> {
    #[inline]
    fn partial_cmp(&self, rhs: &Length<T, U2>) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&rhs.convert::<U>().value)
    }
}

impl<T: Float, U: LengthUnit> fmt::Display for Length<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_zero() {
        let l = Meters::default();
        assert_eq!(l.value, 0.0);
        assert_eq!(l, Meters::ZERO);
    }

    #[test]
    fn test_metric_conversion_exact() {
        let m = Meters::new(1000.0);
        let km: Kilometers = m.convert();
        assert_eq!(km.value, 1.0);

        let back: Meters = km.convert();
        assert_eq!(back.value, 1000.0);
    }

    #[test]
    fn test_small_unit_conversion() {
        let mm = Millimeters::new(1.0);
        let nm: Nanometers = mm.convert();
        assert_eq!(nm.value, 1_000_000.0);
    }

    #[test]
    fn test_extreme_ratio_span() {
        // Lightyears against nanometers crosses 10^24 - the factor
        // arithmetic must not overflow.
        let ly = Lightyears::new(1.0);
        let nm: Nanometers = ly.convert();
        assert!((nm.value - 9.4607304725808e24).abs() / nm.value < 1e-12);
    }

    #[test]
    fn test_imperial_units() {
        let yd = Yards::new(1.0);
        assert!((yd.to_meters() - 0.9144).abs() < 1e-12);

        let mi = Miles::new(1.0);
        assert_eq!(mi.to_meters(), 1609.0);
    }

    #[test]
    fn test_add_takes_left_unit() {
        let total = Meters::new(500.0) + Kilometers::new(1.0);
        assert_eq!(total.value, 1500.0);

        let total = Kilometers::new(1.0) + Meters::new(500.0);
        assert_eq!(total.value, 1.5);
    }

    #[test]
    fn test_sub_takes_left_unit() {
        let diff = Kilometers::new(2.0) - Meters::new(500.0);
        assert_eq!(diff.value, 1.5);
    }

    #[test]
    fn test_scalar_scaling() {
        let l = Meters::new(2.0) * 3.0;
        assert_eq!(l.value, 6.0);
        let l = 3.0 * Meters::new(2.0);
        assert_eq!(l.value, 6.0);
        let l = Meters::new(6.0) / 2.0;
        assert_eq!(l.value, 3.0);
    }

    #[test]
    fn test_cross_unit_comparison() {
        assert_eq!(Meters::new(1000.0), Kilometers::new(1.0));
        assert!(Meters::new(1500.0) > Kilometers::new(1.0));
        assert!(Meters::new(500.0) < Kilometers::new(1.0));
        assert!(Meters::new(1000.0) >= Kilometers::new(1.0));
        assert!(Meters::new(1000.0) <= Kilometers::new(1.0));
    }

    #[test]
    fn test_nearly_eq_in_lhs_unit() {
        let a = Meters::new(1.0);
        let b = Meters::new(1.0 + 0.5e-5);
        assert!(a.nearly_eq(b));
        assert!(!a.equals(b));
    }

    #[test]
    fn test_cast_value_type() {
        let l: Length<f32, Meter> = Meters::new(2.5).cast();
        assert_eq!(l.value, 2.5_f32);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Meters::max_value(), f64::MAX);
        assert_eq!(Meters::min_value(), f64::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Kilometers::new(2.5).to_string(), "2.5 km");
        assert_eq!(Lightyears::new(1.0).to_string(), "1 ly");
    }
}
