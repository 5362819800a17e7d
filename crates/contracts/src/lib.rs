//! Wire types shared between the GitGrade client and the analysis service.

pub mod usecases;
