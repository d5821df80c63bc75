use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid or unsupported image file: {0}")]
    InvalidImageFormat(#[from] image::ImageError),

    #[error("No face detected")]
    NoFaceDetected,

    #[error("Failed to load landmark model: {0}")]
    ModelLoad(String),

    #[error("Invalid sample plan: {0}")]
    InvalidSamplePlan(String),

    #[error("Landmark {index} required by the sample plan is missing ({available} landmarks available)")]
    MissingLandmark { index: u16, available: usize },

    #[error("Pixel buffer of {len} bytes does not match a {width}x{height} RGB image")]
    InvalidPixelBuffer { len: usize, width: u32, height: u32 },
}

impl Error {
    /// Errors caused by the submitted photo rather than by configuration.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::InvalidImageFormat(_) | Error::NoFaceDetected)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_errors() {
        assert!(Error::NoFaceDetected.is_user_facing());
        assert!(!Error::ModelLoad("missing weights".into()).is_user_facing());
        assert!(!Error::MissingLandmark {
            index: 30,
            available: 5
        }
        .is_user_facing());
    }

    #[test]
    fn missing_landmark_message() {
        let err = Error::MissingLandmark {
            index: 35,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "Landmark 35 required by the sample plan is missing (5 landmarks available)"
        );
    }
}
