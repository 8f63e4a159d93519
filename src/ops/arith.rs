use super::binary;
use crate::registry::{Operation, Registry};

pub(super) fn register(r: &mut Registry) {
    r.register(
        Operation::new("+", "(y+x) adds x and y on the stack", |s| {
            binary(s, "+", |y, x| y + x)
        }),
        &[],
    );
    r.register(
        Operation::new("-", "(y-x) takes x from y on the stack", |s| {
            binary(s, "-", |y, x| y - x)
        }),
        &[],
    );
    r.register(
        Operation::new("*", "(y*x) multiplies x with y on the stack", |s| {
            binary(s, "*", |y, x| y * x)
        }),
        &[],
    );
    // Zero divisors give inf/NaN, not an error
    r.register(
        Operation::new("/", "(y/x) divides y by x on the stack", |s| {
            binary(s, "/", |y, x| y / x)
        }),
        &[],
    );
    r.register(
        Operation::new("^", "(y**x) raises y to the power of x on the stack", |s| {
            binary(s, "^", f64::powf)
        }),
        &["pow", "**"],
    );
}

#[cfg(test)]
mod tests {
    use crate::eval::{EvalError, Stack};
    use crate::registry::Registry;

    fn run(label: &str, values: &[f64]) -> Result<Stack, EvalError> {
        let mut s: Stack = values.iter().copied().collect();
        Registry::standard().apply(label, &mut s)?;
        Ok(s)
    }

    #[test]
    fn operand_order() {
        assert_eq!(run("-", &[10.0, 3.0]).unwrap().as_slice(), &[7.0]);
        assert_eq!(run("/", &[10.0, 4.0]).unwrap().as_slice(), &[2.5]);
        assert_eq!(run("^", &[2.0, 10.0]).unwrap().as_slice(), &[1024.0]);
        assert_eq!(run("**", &[4.0, 0.5]).unwrap().as_slice(), &[2.0]);
    }

    #[test]
    fn keeps_values_beneath() {
        let s = run("*", &[1.0, 6.0, 7.0]).unwrap();
        assert_eq!(s.as_slice(), &[1.0, 42.0]);
    }

    #[test]
    fn divide_by_zero_is_ieee() {
        assert_eq!(run("/", &[1.0, 0.0]).unwrap().peek(), Some(f64::INFINITY));
        assert_eq!(
            run("/", &[-1.0, 0.0]).unwrap().peek(),
            Some(f64::NEG_INFINITY)
        );
        assert!(run("/", &[0.0, 0.0]).unwrap().peek().unwrap().is_nan());
    }

    #[test]
    fn too_small_leaves_stack() {
        let mut s: Stack = vec![5.0].into();
        let err = Registry::standard().apply("+", &mut s).unwrap_err();
        assert_eq!(
            err,
            EvalError::StackTooSmall {
                op: "+".into(),
                needed: 2,
                available: 1
            }
        );
        assert_eq!(s.as_slice(), &[5.0]);
    }
}
