use auto_impl::auto_impl;

use crate::{
    error::Error,
    messages::{AnnotationSize, TargetPoint},
};

/// Transport for the operator's selection.
#[auto_impl(&, Box, Arc)]
pub trait TargetPublisher: Send + Sync {
    fn send_point(&self, point: &TargetPoint) -> Result<(), Error>;
    fn send_annotation_size(&self, size: AnnotationSize) -> Result<(), Error>;
}
