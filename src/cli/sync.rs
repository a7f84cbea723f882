use tabled::Table;

use crate::{
    config::Settings, error, info, spotify::SpotifyClient, success, sync::Syncer,
    types::SyncReport, warning,
};

pub async fn sync(settings: Settings) {
    info!(
        "Adding songs from {} to playlist {}",
        settings.file_path.display(),
        settings.playlist_name
    );

    let client = SpotifyClient::new(settings.api_url.as_str(), settings.token_url.as_str());
    let report = match Syncer::new(&client, settings).with_progress(true).run().await {
        Ok(report) => report,
        Err(e) => error!("{}", e),
    };

    print_report(&report);
}

fn print_report(report: &SyncReport) {
    let total = report.outcomes.len();

    if report.failed() > 0 || report.not_found() > 0 || report.skipped() > 0 {
        let table = Table::new(report.unmatched_rows());
        println!("{}", table);
        warning!(
            "{} not found, {} skipped, {} failed",
            report.not_found(),
            report.skipped(),
            report.failed()
        );
    }

    success!(
        "Playlist creation and song addition complete. Added {} of {} songs.",
        report.added(),
        total
    );
}
