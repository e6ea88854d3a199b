use crate::error::ConvertResult;
use crate::models::conversion::{ConversionInput, ConversionOutput};

// Facade 接口，負責協調批次轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 依序轉換所有輸入並打包成 ZIP
    /// # 參數
    /// - input: 已驗證的輸入路徑與轉換選項
    /// # 回傳
    /// - 單一檔案失敗只會記錄在結果中；寫入壓縮檔失敗時返回錯誤
    fn execute_conversion(&self, input: ConversionInput) -> ConvertResult<ConversionOutput>;
}
