use super::ApiClient;
use crate::error::ApiError;
use doorz_shared::ReportFiles;

fn report_path(month: u32, year: i32) -> String {
    format!("/reports/generate?month={}&year={}", month, year)
}

impl ApiClient {
    /// 按需生成月度报表；服务端落盘并返回下载地址
    pub async fn generate_report(&self, month: u32, year: i32) -> Result<ReportFiles, ApiError> {
        self.get_json(&report_path(month, year)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path() {
        assert_eq!(report_path(3, 2026), "/reports/generate?month=3&year=2026");
    }
}
