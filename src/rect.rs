use nalgebra::Matrix1x4;
use num::Float;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

/* ------------------------------------------------------------------------------
 * Type aliases
 * ------------------------------------------------------------------------------ */
pub type Xyxy<T> = Matrix1x4<T>;

/* ------------------------------------------------------------------------------
 * Rect struct
 * ------------------------------------------------------------------------------ */

/// Axis-aligned box stored as `[x1, y1, x2, y2]`.
///
/// `x1 < x2` and `y1 < y2` are expected from the upstream tracker but are not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T>
where
    T: Debug + Float + 'static,
{
    xyxy: Xyxy<T>,
}

impl<T> Rect<T>
where
    T: Debug + Float + 'static,
{
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self {
            xyxy: Matrix1x4::new(x1, y1, x2, y2),
        }
    }

    // Stands in for a degenerate tracker box in the reconstructor tests
    #[cfg(test)]
    pub(crate) fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    #[inline(always)]
    pub fn x1(&self) -> T {
        self.xyxy[(0, 0)]
    }

    #[inline(always)]
    pub fn y1(&self) -> T {
        self.xyxy[(0, 1)]
    }

    #[inline(always)]
    pub fn x2(&self) -> T {
        self.xyxy[(0, 2)]
    }

    #[inline(always)]
    pub fn y2(&self) -> T {
        self.xyxy[(0, 3)]
    }

    #[inline(always)]
    pub fn width(&self) -> T {
        self.x2() - self.x1()
    }

    #[inline(always)]
    pub fn height(&self) -> T {
        self.y2() - self.y1()
    }

    /// Plain `width * height`, no +1 pixel convention.
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    pub fn center(&self) -> (T, T) {
        let two = T::one() + T::one();
        ((self.x1() + self.x2()) / two, (self.y1() + self.y2()) / two)
    }

    /// Get bounding box as [x1, y1, x2, y2] format
    pub fn get_xyxy(&self) -> [T; 4] {
        [self.x1(), self.y1(), self.x2(), self.y2()]
    }

    pub fn from_xyxy(xyxy: [T; 4]) -> Self {
        Self::new(xyxy[0], xyxy[1], xyxy[2], xyxy[3])
    }
}

impl<T> Serialize for Rect<T>
where
    T: Debug + Float + Serialize + 'static,
{
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.get_xyxy().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Rect<T>
where
    T: Debug + Float + Deserialize<'de> + 'static,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let xyxy = <[T; 4]>::deserialize(deserializer)?;
        Ok(Self::from_xyxy(xyxy))
    }
}
