use clap::Args;
use skillkwiz::config::AppConfig;
use skillkwiz::error::AppError;
use skillkwiz::export::download_pdf;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Article title as listed on the blog page
    #[arg(long)]
    pub(crate) title: String,
    /// Directory to write the PDF into (defaults to APP_EXPORT_DIR)
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs { title, out_dir } = args;
    let out_dir = match out_dir {
        Some(dir) => dir,
        None => AppConfig::load()?.export.output_dir,
    };

    let article = download_pdf(&title);
    if article.used_placeholder {
        println!("No article is published under '{title}'; writing placeholder text");
    }

    let path = article.save_to(&out_dir)?;
    println!("Saved {} ({} bytes)", path.display(), article.bytes.len());
    Ok(())
}
