//! File uploads. The backend stores the file and answers with its public URL
//! as a bare string, not the usual envelope.

use web_sys::{File, FormData};

use crate::services::http;
use crate::services::{ApiError, AuthApi};

fn form_with_file(file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|_| http::setup_failure("FormData unavailable"))?;
    form.append_with_blob("file", file)
        .map_err(|_| http::setup_failure("could not attach file"))?;
    Ok(form)
}

pub async fn upload_image(file: &File) -> Result<String, ApiError> {
    AuthApi::post_multipart("/upload/image", &form_with_file(file)?).await
}

pub async fn upload_video(file: &File) -> Result<String, ApiError> {
    AuthApi::post_multipart("/upload/video", &form_with_file(file)?).await
}

pub async fn upload_document(file: &File) -> Result<String, ApiError> {
    AuthApi::post_multipart("/upload/document", &form_with_file(file)?).await
}
