use std::process::ExitCode;

use heic_converter::action::cli::process_args;
use heic_converter::utils::utils::format_size_mb;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let output = match process_args(args) {
        Ok(output) => output,
        Err(e) => {
            log::error!("轉換中止：{}", e);
            eprintln!("❌ 轉換失敗：{}", e);
            return ExitCode::FAILURE;
        }
    };

    if !output.failures.is_empty() {
        eprintln!("⚠️ {} 個檔案轉換失敗：", output.failures.len());
        for failure in &output.failures {
            eprintln!("  {}: {}", failure.file_name, failure.message);
        }
    }

    match output.archive {
        Some(archive) => {
            println!("✅ 轉換完成！共 {} 個檔案", output.converted);
            println!("📦 ZIP 檔案已儲存至：{}", archive.archive_path.display());
            println!("ZIP 檔案大小：{}", format_size_mb(archive.archive_bytes.len() as u64));
            log::info!("程式執行完成，輸出檔案：{}", archive.archive_name);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("❌ 沒有任何檔案轉換成功。");
            ExitCode::FAILURE
        }
    }
}
