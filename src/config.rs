use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// 내보내기 파일 접미사: 품의 업로드 양식
pub const UPLOAD_FORM_SUFFIX: &str = "품의업로드양식";
/// 내보내기 파일 접미사: 장바구니
pub const CART_SUFFIX: &str = "장바구니";
pub const DEFAULT_SHEET_NAME: &str = "품목내역";

const CONFIG_FILE: &str = "config/cart-procurement";
const ENV_PREFIX: &str = "CART";

/// 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// "{사이트}_{접미사}.xlsx"의 접미사
    pub filename_suffix: String,
    pub sheet_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_suffix: UPLOAD_FORM_SUFFIX.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// 기본값 → config/cart-procurement.{toml,yaml,json} → 환경 변수 순으로 덮어쓴다
    ///
    /// 환경 변수 예: CART_SERVER__PORT=9000, CART_EXPORT__FILENAME_SUFFIX=장바구니
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("export.filename_suffix", defaults.export.filename_suffix)?
            .set_default("export.sheet_name", defaults.export.sheet_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_upload_form_suffix() {
        let config = AppConfig::default();
        assert_eq!(config.export.filename_suffix, "품의업로드양식");
        assert_eq!(config.export.sheet_name, "품목내역");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn builder_defaults_deserialize() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.export.filename_suffix, UPLOAD_FORM_SUFFIX);
    }

    #[test]
    fn file_source_overrides_suffix() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .add_source(config::File::from_str(
                "[export]\nfilename_suffix = \"장바구니\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.export.filename_suffix, CART_SUFFIX);
        assert_eq!(config.export.sheet_name, DEFAULT_SHEET_NAME);
    }
}
