use crate::errors::{PeerReviewError, Result};

/// 教师评审的勾选数量必须与评分标准数量一致
pub fn validate_teacher_checks(checks: &[bool], number_of_criteria: usize) -> Result<()> {
    if checks.len() != number_of_criteria {
        return Err(PeerReviewError::validation(format!(
            "勾选数量 ({}) 与评分标准数量 ({}) 不一致",
            checks.len(),
            number_of_criteria
        )));
    }
    Ok(())
}

/// 成绩必须是非负的有限数
pub fn validate_grade(grade: f64) -> Result<()> {
    if !grade.is_finite() || grade < 0.0 {
        return Err(PeerReviewError::validation(format!("成绩无效: {grade}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_checks_length() {
        assert!(validate_teacher_checks(&[true, false], 2).is_ok());
        let err = validate_teacher_checks(&[true], 2).unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(validate_teacher_checks(&[], 0).is_ok());
    }

    #[test]
    fn test_grade_validation() {
        assert!(validate_grade(0.0).is_ok());
        assert!(validate_grade(17.5).is_ok());
        assert!(validate_grade(-1.0).is_err());
        assert!(validate_grade(f64::NAN).is_err());
        assert!(validate_grade(f64::INFINITY).is_err());
    }
}
