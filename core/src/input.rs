use crate::error::InputError;

pub fn parse_number(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber(trimmed.to_string())),
    }
}

pub fn validate_weekly_waste(value: f64) -> Result<f64, InputError> {
    if value < 0.0 {
        return Err(InputError::NegativeWaste(value));
    }
    // -0.0 + 0.0 == +0.0
    Ok(value + 0.0)
}

pub fn validate_rate(value: f64) -> Result<f64, InputError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(InputError::RateOutOfRange(value));
    }
    Ok(value + 0.0)
}

pub fn validate_target_rate(target: f64, current: f64) -> Result<f64, InputError> {
    let target = validate_rate(target)?;
    if target < current {
        return Err(InputError::TargetBelowCurrent { target, current });
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", 42.0)]
    #[case("  7.5\n", 7.5)]
    #[case("-3", -3.0)]
    #[case("0", 0.0)]
    fn test_parse_number_accepts(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_number(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("12kg")]
    #[case("NaN")]
    #[case("inf")]
    fn test_parse_number_rejects(#[case] input: &str) {
        assert!(matches!(parse_number(input), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn test_negative_waste_rejected() {
        assert_eq!(validate_weekly_waste(-0.5), Err(InputError::NegativeWaste(-0.5)));
        assert_eq!(validate_weekly_waste(0.0), Ok(0.0));
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        let waste = parse_number("-0").and_then(validate_weekly_waste).unwrap();
        assert!(waste.is_sign_positive());

        let rate = parse_number("-0.0").and_then(validate_rate).unwrap();
        assert!(rate.is_sign_positive());
        assert_eq!(format!("{:.2}", rate), "0.00");
    }

    #[rstest]
    #[case(-1.0, false)]
    #[case(0.0, true)]
    #[case(55.5, true)]
    #[case(100.0, true)]
    #[case(100.1, false)]
    fn test_validate_rate_bounds(#[case] value: f64, #[case] ok: bool) {
        assert_eq!(validate_rate(value).is_ok(), ok);
    }

    #[rstest]
    #[case(50.0, 20.0, true)]
    #[case(20.0, 20.0, true)]
    #[case(19.9, 20.0, false)]
    #[case(0.0, 100.0, false)]
    #[case(101.0, 20.0, false)]
    fn test_validate_target_rate(#[case] target: f64, #[case] current: f64, #[case] ok: bool) {
        assert_eq!(validate_target_rate(target, current).is_ok(), ok);
    }

    #[test]
    fn test_target_below_current_message() {
        let err = validate_target_rate(10.0, 30.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "target rate 10% must not be lower than current rate 30%"
        );
    }
}
