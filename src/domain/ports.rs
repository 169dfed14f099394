use crate::core::base_url::DIRECT_BACKEND_URL;

/// 環境資訊來源：覆寫的 API URL 與目前執行的主機
///
/// 不直接讀取行程環境變數，方便測試時模擬不同的主機。
pub trait ConfigProvider: Send + Sync {
    /// 明確指定的 API 基底 URL（對應前端的 API URL 環境變數）
    fn api_url_override(&self) -> Option<&str>;

    /// 目前執行的主機名稱，例如 `localhost` 或 `shop.example.com`
    fn current_host(&self) -> &str;

    /// 相對 URL（例如 `/api/orders`）要以哪個來源補成絕對 URL
    fn origin(&self) -> String {
        format!("http://{}", self.current_host())
    }

    /// 本機開發時直連的後端位址
    fn direct_backend_url(&self) -> &str {
        DIRECT_BACKEND_URL
    }
}
