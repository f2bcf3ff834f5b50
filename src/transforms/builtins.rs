//! The built-in transforms available out of the box.
//!
//! These are registered explicitly by `register_builtins`, which the `Engine`
//! calls at construction. There is no implicit or load-time registration.

use super::registry::TransformRegistry;
use super::transform_fn;

/// Names of every built-in transform, in registration order.
pub const BUILTIN_NAMES: [&str; 5] = [
    "center",
    "square",
    "sqrt_plus_one",
    "clip_0_2",
    "normalize_0_1",
];

/// Shifts a value so that the midpoint of `[0, 1]` maps to zero.
pub fn center(x: f64) -> f64 {
    x - 0.5
}

pub fn square(x: f64) -> f64 {
    x * x
}

/// `sqrt(|x|) + 1`; total over all reals.
pub fn sqrt_plus_one(x: f64) -> f64 {
    x.abs().sqrt() + 1.0
}

/// Clamps into `[0, 2]`.
pub fn clip_0_2(x: f64) -> f64 {
    x.clamp(0.0, 2.0)
}

/// Identity placeholder.
///
/// This intentionally does NOT normalize: range information is reported by
/// `report::run_with_context`, which must see the unnormalized extremes.
pub fn normalize_0_1(x: f64) -> f64 {
    x
}

/// Registers all five built-ins into `registry`.
pub fn register_builtins(registry: &mut TransformRegistry) {
    registry.register("center", transform_fn(center));
    registry.register("square", transform_fn(square));
    registry.register("sqrt_plus_one", transform_fn(sqrt_plus_one));
    registry.register("clip_0_2", transform_fn(clip_0_2));
    registry.register("normalize_0_1", transform_fn(normalize_0_1));
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_square() {
        assert_eq!(center(0.0), -0.5);
        assert_eq!(center(1.0), 0.5);
        assert_eq!(square(-0.5), 0.25);
        assert_eq!(square(3.0), 9.0);
    }

    #[test]
    fn test_sqrt_plus_one_uses_absolute_value() {
        assert_eq!(sqrt_plus_one(0.0), 1.0);
        assert_eq!(sqrt_plus_one(4.0), 3.0);
        assert_eq!(sqrt_plus_one(-4.0), 3.0);
    }

    #[test]
    fn test_clip_0_2_bounds() {
        assert_eq!(clip_0_2(-1.0), 0.0);
        assert_eq!(clip_0_2(1.5), 1.5);
        assert_eq!(clip_0_2(7.0), 2.0);
    }

    #[test]
    fn test_normalize_0_1_is_identity() {
        for x in [-3.5, 0.0, 0.42, 1.0, 250.0] {
            assert_eq!(normalize_0_1(x), x);
        }
    }

    #[test]
    fn test_register_builtins_registers_every_name() {
        let mut registry = TransformRegistry::new();
        register_builtins(&mut registry);

        assert_eq!(registry.len(), BUILTIN_NAMES.len());
        for name in BUILTIN_NAMES {
            assert!(registry.contains(name), "missing builtin {name}");
        }
        let clip = registry.lookup("clip_0_2").unwrap();
        assert_eq!(clip(5.0), 2.0);
    }
}
