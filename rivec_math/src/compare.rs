//! Aggregate comparisons.
//!
//! A vector is compared against a scalar through its component sum `x + y`,
//! and against another vector conjunctively: a relation holds only when it
//! holds for both components. Every method reads as "`self` ... `other`", so
//! `v.all_components_greater(w)` is true when `w.x < v.x && w.y < v.y`.

use crate::vec2::Vector2;

impl Vector2 {
    /// `s < x + y`.
    pub fn sum_exceeds(&self, s: f32) -> bool {
        s < self.component_sum()
    }

    /// `s > x + y`.
    pub fn sum_below(&self, s: f32) -> bool {
        s > self.component_sum()
    }

    /// `s <= x + y`.
    pub fn sum_at_least(&self, s: f32) -> bool {
        s <= self.component_sum()
    }

    /// `s >= x + y`.
    pub fn sum_at_most(&self, s: f32) -> bool {
        s >= self.component_sum()
    }

    pub fn sum_equals(&self, s: f32) -> bool {
        s == self.component_sum()
    }

    pub fn sum_differs(&self, s: f32) -> bool {
        s != self.component_sum()
    }

    pub fn all_components_greater(&self, other: Vector2) -> bool {
        other.x < self.x && other.y < self.y
    }

    pub fn all_components_less(&self, other: Vector2) -> bool {
        other.x > self.x && other.y > self.y
    }

    pub fn all_components_greater_or_equal(&self, other: Vector2) -> bool {
        other.x <= self.x && other.y <= self.y
    }

    pub fn all_components_less_or_equal(&self, other: Vector2) -> bool {
        other.x >= self.x && other.y >= self.y
    }

    /// True only when `x` and `y` both differ; a vector sharing one component
    /// with `other` does not count.
    pub fn both_components_differ(&self, other: Vector2) -> bool {
        other.x != self.x && other.y != self.y
    }

    /// True when either component equals `s`.
    pub fn contains_component(&self, s: f32) -> bool {
        self.x == s || self.y == s
    }
}

#[cfg(test)]
mod test {
    use crate::vec2::v2;

    #[test]
    fn compare_scalar_uses_component_sum() {
        let v = v2(3.0, 4.0);

        assert!(v.sum_exceeds(6.9));
        assert!(!v.sum_exceeds(7.0));
        assert!(v.sum_below(7.1));
        assert!(!v.sum_below(7.0));
        assert!(v.sum_at_least(7.0));
        assert!(!v.sum_at_least(7.5));
        assert!(v.sum_at_most(7.0));
        assert!(!v.sum_at_most(6.5));
        assert!(v.sum_equals(7.0));
        assert!(v.sum_differs(5.0));
        assert!(!v.sum_differs(7.0));
    }

    #[test]
    fn compare_scalar_ignores_magnitude() {
        // |(3, 4)| is 5 but the sum is 7.
        assert!(!v2(3.0, 4.0).sum_equals(5.0));
        assert!(v2(3.0, 4.0).sum_exceeds(5.0));
    }

    #[test]
    fn compare_vector_is_conjunctive() {
        let v = v2(10.0, 10.0);

        assert!(v.all_components_greater(v2(5.0, 5.0)));
        assert!(!v.all_components_greater(v2(5.0, 15.0)));
        assert!(!v.all_components_greater(v2(10.0, 5.0)));

        assert!(v.all_components_less(v2(15.0, 15.0)));
        assert!(!v.all_components_less(v2(15.0, 5.0)));

        assert!(v.all_components_greater_or_equal(v2(10.0, 5.0)));
        assert!(!v.all_components_greater_or_equal(v2(11.0, 5.0)));

        assert!(v.all_components_less_or_equal(v2(10.0, 15.0)));
        assert!(!v.all_components_less_or_equal(v2(9.0, 15.0)));
    }

    #[test]
    fn compare_vector_is_not_an_ordering() {
        let a = v2(1.0, 5.0);
        let b = v2(5.0, 1.0);

        assert!(!a.all_components_greater(b));
        assert!(!a.all_components_less(b));
        assert!(!b.all_components_greater(a));
        assert!(!b.all_components_less(a));
    }

    #[test]
    fn compare_both_components_differ() {
        let v = v2(10.0, 10.0);

        assert!(v.both_components_differ(v2(1.0, 2.0)));
        assert!(!v.both_components_differ(v2(10.0, 2.0)));
        assert!(!v.both_components_differ(v2(1.0, 10.0)));
        assert!(!v.both_components_differ(v));
    }

    #[test]
    fn compare_contains_component() {
        let v = v2(10.0, -2.0);

        assert!(v.contains_component(10.0));
        assert!(v.contains_component(-2.0));
        assert!(!v.contains_component(8.0));
    }
}
