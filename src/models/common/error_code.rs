use crate::errors::PeerReviewError;

/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,

    // 互评错误 2xxx
    PeerReviewNotFound = 2000,
    SubmissionNotFound = 2001,
    TeacherReviewInvalid = 2002,
    ReviewDataInconsistent = 2003,
    NotificationFailed = 2004,
}

impl From<&PeerReviewError> for ErrorCode {
    fn from(err: &PeerReviewError) -> Self {
        match err {
            PeerReviewError::Validation(_) => ErrorCode::BadRequest,
            PeerReviewError::NotFound(_) => ErrorCode::NotFound,
            PeerReviewError::DataIntegrity(_) => ErrorCode::ReviewDataInconsistent,
            PeerReviewError::Notification(_) => ErrorCode::NotificationFailed,
            _ => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            ErrorCode::from(&PeerReviewError::data_integrity("x")),
            ErrorCode::ReviewDataInconsistent
        );
        assert_eq!(
            ErrorCode::from(&PeerReviewError::database_operation("x")),
            ErrorCode::InternalServerError
        );
        assert_eq!(ErrorCode::BadRequest as i32, 1000);
    }
}
