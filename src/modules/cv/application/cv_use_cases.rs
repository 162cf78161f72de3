use std::sync::Arc;

use crate::modules::cv::application::use_cases::delete_cv::IDeleteCvUseCase;
use crate::modules::cv::application::use_cases::download_cv::IDownloadCvUseCase;
use crate::modules::cv::application::use_cases::fetch_cvs::{IFetchCvByIdUseCase, IFetchCvsUseCase};
use crate::modules::cv::application::use_cases::get_current_cv::{
    ICvExistsUseCase, IGetCurrentCvUseCase,
};
use crate::modules::cv::application::use_cases::upload_cv::IUploadCvUseCase;

#[derive(Clone)]
pub struct CvUseCases {
    pub get_current: Arc<dyn IGetCurrentCvUseCase + Send + Sync>,
    pub exists: Arc<dyn ICvExistsUseCase + Send + Sync>,
    pub fetch_all: Arc<dyn IFetchCvsUseCase + Send + Sync>,
    pub fetch_by_id: Arc<dyn IFetchCvByIdUseCase + Send + Sync>,
    pub upload: Arc<dyn IUploadCvUseCase + Send + Sync>,
    pub download: Arc<dyn IDownloadCvUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteCvUseCase + Send + Sync>,
}
