pub mod admin;
pub mod community;
pub mod journal;
pub mod library;
pub mod mindfulness;
pub mod mood;
pub mod session;
pub mod therapists;

#[cfg(test)]
mod tests {
    use happyheads_core::config::AppConfig;
    use happyheads_core::HappyHeadsError;
    use tempfile::TempDir;
    use tokio_util::sync::CancellationToken;

    use crate::bootstrap::App;

    async fn app(dir: &TempDir) -> App {
        let config = AppConfig {
            storage_dir: Some(dir.path().to_path_buf()),
            sign_in_delay_ms: 0,
            ..AppConfig::default()
        };
        App::start(config).await.unwrap()
    }

    fn redirects_to(err: &anyhow::Error, path: &str) -> bool {
        matches!(
            err.downcast_ref::<HappyHeadsError>(),
            Some(HappyHeadsError::AccessDenied { redirect }) if redirect == path
        )
    }

    #[tokio::test]
    async fn test_signed_out_mood_log_is_refused_and_not_stored() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;

        let err = super::mood::log(&app, 4, "fine").await.unwrap_err();

        assert!(redirects_to(&err, "/auth"), "{err:?}");
        let key = app.config.mood_history_key();
        assert!(app.storage.get_item(&key).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_page_commands_require_sign_in() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;

        let results = [
            super::community::list(&app, String::new(), None, "recent").await,
            super::library::list(&app, String::new(), None, None).await,
            super::journal::list(&app, String::new(), None).await,
            super::mood::summary(&app, "week").await,
            super::mood::history(&app).await,
            super::mindfulness::list(&app, None).await,
            super::therapists::list(&app, String::new(), None).await,
        ];
        for result in results {
            let err = result.unwrap_err();
            assert!(redirects_to(&err, "/auth"), "{err:?}");
        }

        let err = super::admin::show(&app, String::new(), None).await.unwrap_err();
        assert!(redirects_to(&err, "/dashboard"), "{err:?}");
    }

    #[tokio::test]
    async fn test_interrupt_cancels_every_sign_in_attempt() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;
        app.interrupt.cancel();

        for _ in 0..2 {
            let err = super::session::sign_in(&app, "jane@example.com", "secret")
                .await
                .unwrap_err();
            let err = err.downcast_ref::<HappyHeadsError>().unwrap();
            assert!(err.is_cancelled(), "{err:?}");
        }
        let err = super::session::register(&app, "sam@example.com", "secret", "Sam")
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<HappyHeadsError>().unwrap().is_cancelled());
        assert!(app.session.identity().is_none());
    }

    #[tokio::test]
    async fn test_signed_in_mood_log_is_stored() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;
        app.session
            .sign_in("jane@example.com", "secret", CancellationToken::new())
            .await
            .unwrap();

        super::mood::log(&app, 4, "fine").await.unwrap();
        super::library::list(&app, String::new(), None, None).await.unwrap();

        let key = app.config.mood_history_key();
        assert!(app.storage.get_item(&key).unwrap().is_some());
    }
}
