use crate::domain::format::Format;
use crate::domain::model::Record;
use crate::utils::error::Result;

/// 檔案存取介面，讀寫都是同步且一次完成
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}

pub trait ConversionSettings {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn input_format(&self) -> Result<Format>;
    fn output_format(&self) -> Result<Format>;
}

pub trait Pipeline {
    /// 讀取並驗證輸入記錄
    fn extract(&self) -> Result<Record>;
    /// 寫出記錄，回傳輸出路徑
    fn load(&self, record: &Record) -> Result<String>;
}
