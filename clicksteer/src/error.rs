use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "clicksteer: Invalid annotation size {} (must be a positive integer no larger than {})",
        .0,
        u32::MAX
    )]
    InvalidAnnotationSize(i64),
    #[error("clicksteer: clicksteer-interface: {}", .0)]
    Interface(#[from] clicksteer_interface::Error),
}
