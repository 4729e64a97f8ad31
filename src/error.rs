use crate::models::Site;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("텍스트를 입력해 주세요")]
    EmptyInput,

    #[error("[{site}] 추출된 데이터가 없습니다. 입력한 텍스트 및 선택한 사이트를 다시 확인해 주세요")]
    NoItemsExtracted { site: Site },

    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CartError>;
