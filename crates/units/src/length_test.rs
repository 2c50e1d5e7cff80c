mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, PC_TO_CM, PC_TO_KM};

    #[test]
    fn test_length_conversions() {
        let one_pc = Length::from_parsecs(1.0);
        assert_relative_eq!(one_pc.to_cm(), PC_TO_CM);
        assert_relative_eq!(one_pc.to_km(), PC_TO_KM);

        let from_cm = Length::from_cm(PC_TO_CM);
        assert_relative_eq!(from_cm.to_parsecs(), 1.0);

        // 1 pc ≈ 3.26 ly
        assert_relative_eq!(one_pc.to_light_years(), 3.26, epsilon = 0.01);
        assert_relative_eq!(Length::from_light_years(3.2617).to_parsecs(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let a = Length::from_parsecs(5.0);
        let b = Length::from_parsecs(3.0);

        assert_relative_eq!((a + b).to_parsecs(), 8.0);
        assert_relative_eq!((a - b).to_parsecs(), 2.0);
        assert_relative_eq!((a * 2.0).to_parsecs(), 10.0);
        assert_relative_eq!((2.0 * a).to_parsecs(), 10.0);
        assert_relative_eq!((a / 5.0).to_parsecs(), 1.0);
        assert_relative_eq!(b / a, 0.6);
    }

    #[test]
    fn test_length_max_and_zero() {
        let a = Length::from_parsecs(1.5);
        assert_eq!(a.max(Length::zero()), a);
        assert_eq!(Length::zero().to_cm(), 0.0);
    }
}
