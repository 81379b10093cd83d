#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::{json, Value};

    use crate::models::{Region, RegionLabels, SchoolYear, Season, VacationPeriod};
    use crate::services::countdown::{countdown, days_remaining, next_upcoming, periods_for_region};
    use crate::services::{
        resolve_available_years, school_year_exists, HolidayService, HolidaySession,
        RefreshOutcome, Settings,
    };
    use crate::source::{LocalSource, SourceError};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(name: &str, region: Region, start: NaiveDate, end: NaiveDate) -> VacationPeriod {
        VacationPeriod::new(name, region, start, end, false).unwrap()
    }

    fn year(start: i32) -> SchoolYear {
        SchoolYear::starting(start)
    }

    fn document(name: &str, region: &str, start: &str, end: &str) -> Value {
        json!({
            "content": [{
                "vacations": [{
                    "type": name,
                    "compulsorydates": "true",
                    "regions": [{ "region": region, "startdate": start, "enddate": end }]
                }]
            }]
        })
    }

    fn empty_document() -> Value {
        json!({ "content": [{ "vacations": [] }] })
    }

    fn service(source: LocalSource) -> HolidayService {
        HolidayService::new(Arc::new(source), RegionLabels::default())
    }

    // --- countdown ---

    #[test]
    fn test_days_remaining_counts_calendar_days() {
        let summer = period("Zomervakantie", Region::North, date(2026, 7, 11), date(2026, 8, 23));
        assert_eq!(days_remaining(&summer, date(2026, 7, 1)), 10);
        assert_eq!(days_remaining(&summer, date(2026, 7, 11)), 0);
        assert_eq!(days_remaining(&summer, date(2026, 7, 10)), 1);
    }

    #[test]
    fn test_days_remaining_ignores_time_of_day() {
        let summer = period("Zomervakantie", Region::North, date(2026, 7, 11), date(2026, 8, 23));
        let late_evening = Utc.with_ymd_and_hms(2026, 7, 10, 23, 59, 59).unwrap();
        let early_morning = Utc.with_ymd_and_hms(2026, 7, 10, 0, 0, 1).unwrap();
        assert_eq!(days_remaining(&summer, late_evening), 1);
        assert_eq!(days_remaining(&summer, early_morning), 1);
    }

    #[test]
    fn test_next_upcoming_excludes_started_periods() {
        let periods = vec![
            period("Meivakantie", Region::Middle, date(2026, 4, 25), date(2026, 5, 3)),
            period("Zomervakantie", Region::Middle, date(2026, 7, 18), date(2026, 8, 30)),
        ];

        let next = next_upcoming(&periods, Region::Middle, date(2026, 4, 26)).unwrap();
        assert_eq!(next.name(), "Zomervakantie");
    }

    #[test]
    fn test_next_upcoming_includes_period_starting_today() {
        let periods = vec![period("Herfstvakantie", Region::South, date(2026, 10, 10), date(2026, 10, 18))];

        let result = countdown(&periods, Region::South, date(2026, 10, 10)).unwrap();
        assert_eq!(result.days_remaining, 0);
        assert_eq!(result.season(), Season::Autumn);
    }

    #[test]
    fn test_next_upcoming_filters_by_region() {
        let periods = vec![
            period("Voorjaarsvakantie", Region::North, date(2026, 2, 14), date(2026, 2, 22)),
            period("Voorjaarsvakantie", Region::South, date(2026, 2, 21), date(2026, 3, 1)),
        ];

        let next = next_upcoming(&periods, Region::South, date(2026, 2, 1)).unwrap();
        assert_eq!(next.region(), Region::South);
        assert_eq!(next.start(), date(2026, 2, 21));
        assert!(next_upcoming(&periods, Region::Middle, date(2026, 2, 1)).is_none());
    }

    #[test]
    fn test_next_upcoming_does_not_rely_on_order() {
        let periods = vec![
            period("Zomervakantie", Region::North, date(2026, 7, 4), date(2026, 8, 16)),
            period("Meivakantie", Region::North, date(2026, 4, 25), date(2026, 5, 3)),
        ];

        let next = next_upcoming(&periods, Region::North, date(2026, 3, 1)).unwrap();
        assert_eq!(next.name(), "Meivakantie");
    }

    #[test]
    fn test_next_upcoming_first_in_input_order_wins_ties() {
        let periods = vec![
            period("Eerste", Region::North, date(2026, 7, 4), date(2026, 8, 16)),
            period("Tweede", Region::North, date(2026, 7, 4), date(2026, 8, 16)),
        ];

        let next = next_upcoming(&periods, Region::North, date(2026, 7, 1)).unwrap();
        assert_eq!(next.name(), "Eerste");
    }

    #[test]
    fn test_countdown_none_after_last_period() {
        let periods = vec![period("Zomervakantie", Region::North, date(2026, 7, 4), date(2026, 8, 16))];
        assert!(countdown(&periods, Region::North, date(2026, 7, 5)).is_none());
    }

    #[test]
    fn test_periods_for_region_preserves_order() {
        let periods = vec![
            period("A", Region::North, date(2026, 1, 1), date(2026, 1, 2)),
            period("B", Region::South, date(2026, 1, 3), date(2026, 1, 4)),
            period("C", Region::North, date(2026, 1, 5), date(2026, 1, 6)),
        ];

        let names: Vec<&str> = periods_for_region(&periods, Region::North)
            .map(VacationPeriod::name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    // --- availability ---

    #[tokio::test]
    async fn test_school_year_exists_requires_non_empty_vacations() {
        let source = LocalSource::new()
            .with_document(year(2025), document("Kerstvakantie", "heel Nederland", "2025-12-20", "2026-01-04"))
            .with_document(year(2026), empty_document())
            .with_document(year(2027), json!({ "content": [] }));
        source.insert_failure(year(2028), SourceError::transport("connection reset"));

        assert!(school_year_exists(&source, year(2025)).await);
        assert!(!school_year_exists(&source, year(2026)).await);
        assert!(!school_year_exists(&source, year(2027)).await);
        assert!(!school_year_exists(&source, year(2028)).await);
        assert!(!school_year_exists(&source, year(2029)).await);
    }

    #[tokio::test]
    async fn test_resolve_available_years_all_failing_falls_back() {
        let source = LocalSource::new();
        let years = resolve_available_years(&source, 2026, 4).await;
        assert_eq!(years, vec![year(2026)]);
        assert_eq!(years[0].to_string(), "2026-2027");
        assert_eq!(source.fetch_count(), 11);
    }

    #[tokio::test]
    async fn test_resolve_available_years_window_bounds() {
        let doc = document("Zomervakantie", "noord", "2026-07-04", "2026-08-16");
        let source = LocalSource::new()
            .with_document(year(2023), doc.clone())
            .with_document(year(2024), doc.clone())
            .with_document(year(2034), doc.clone())
            .with_document(year(2035), doc);

        let years = resolve_available_years(&source, 2026, 2).await;
        assert_eq!(years, vec![year(2024), year(2034)]);
    }

    #[tokio::test]
    async fn test_resolve_available_years_zero_concurrency_still_probes() {
        let source = LocalSource::new()
            .with_document(year(2025), document("Zomervakantie", "zuid", "2026-07-18", "2026-08-30"));

        let years = resolve_available_years(&source, 2026, 0).await;
        assert_eq!(years, vec![year(2025)]);
        assert_eq!(source.peak_in_flight(), 1);
    }

    // --- holiday service ---

    #[tokio::test]
    async fn test_service_vacations_propagates_failure() {
        let source = LocalSource::new();
        source.insert_failure(year(2026), SourceError::http(503, year(2026)));
        let service = service(source);

        let err = service.vacations(year(2026)).await.unwrap_err();
        assert_eq!(err.to_string(), "API fetch failed (503)");
    }

    #[tokio::test]
    async fn test_service_vacations_normalizes() {
        let source = LocalSource::new().with_document(
            year(2026),
            document("  Zomer   vakantie ", "heel Nederland", "2027-07-10", "2027-08-22"),
        );
        let service = service(source);

        let periods = service.vacations(year(2026)).await.unwrap();
        assert_eq!(periods.len(), 3);
        assert!(periods.iter().all(|p| p.name() == "Zomer vakantie"));
    }

    // --- session ---

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.region, Region::North);
        assert_eq!(settings.school_year.to_string(), "2025-2026");
        assert!(!settings.loaded);
    }

    #[tokio::test]
    async fn test_refresh_waits_for_loaded_settings() {
        let source = LocalSource::new()
            .with_document(year(2025), document("Kerstvakantie", "noord", "2025-12-20", "2026-01-04"));
        let session = HolidaySession::new(service(source.clone()));

        assert_eq!(session.refresh().await, RefreshOutcome::NotLoaded);
        assert_eq!(source.fetch_count(), 0);

        session.load_settings(Region::North, year(2025));
        assert_eq!(session.refresh().await, RefreshOutcome::Applied);
        let view = session.view();
        assert_eq!(view.periods.len(), 1);
        assert!(view.error.is_none());
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn test_refresh_failure_sets_error() {
        let source = LocalSource::new();
        source.insert_failure(year(2025), SourceError::http(500, year(2025)));
        let session = HolidaySession::new(service(source));
        session.load_settings(Region::North, year(2025));

        assert_eq!(session.refresh().await, RefreshOutcome::Failed);
        let view = session.view();
        assert!(view.periods.is_empty());
        assert_eq!(view.error.as_deref(), Some("API fetch failed (500)"));
    }

    #[tokio::test]
    async fn test_refresh_discards_stale_result() {
        let source = LocalSource::new()
            .with_document(year(2025), document("Oud", "noord", "2025-12-20", "2026-01-04"))
            .with_document(year(2026), document("Nieuw", "noord", "2026-12-19", "2027-01-03"));
        source.set_delay(year(2025), Duration::from_millis(100));
        let session = HolidaySession::new(service(source));
        session.load_settings(Region::North, year(2025));

        let change = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            session.set_school_year(year(2026));
        };
        let (outcome, ()) = tokio::join!(session.refresh(), change);
        assert_eq!(outcome, RefreshOutcome::Stale);
        let view = session.view();
        assert!(view.periods.is_empty());
        assert!(!view.loading);

        assert_eq!(session.refresh().await, RefreshOutcome::Applied);
        assert_eq!(session.view().periods[0].name(), "Nieuw");
    }

    #[tokio::test]
    async fn test_region_change_does_not_bump_generation() {
        let session = HolidaySession::new(service(LocalSource::new()));
        let loaded = session.load_settings(Region::North, year(2025));

        assert_eq!(session.set_region(Region::South), loaded);
        assert_eq!(session.settings().region, Region::South);
        assert!(session.set_school_year(year(2026)) > loaded);
    }

    #[tokio::test]
    async fn test_refresh_clears_previous_error_while_loading() {
        let source = LocalSource::new();
        source.insert_failure(year(2025), SourceError::http(500, year(2025)));
        let session = HolidaySession::new(service(source.clone()));
        session.load_settings(Region::North, year(2025));
        assert_eq!(session.refresh().await, RefreshOutcome::Failed);

        source.insert_document(year(2025), document("Kerstvakantie", "noord", "2025-12-20", "2026-01-04"));
        source.set_delay(year(2025), Duration::from_millis(50));
        let observe = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            session.view()
        };
        let (outcome, during) = tokio::join!(session.refresh(), observe);

        assert!(during.loading);
        assert!(during.error.is_none());
        assert_eq!(outcome, RefreshOutcome::Applied);
        assert!(!session.view().loading);
    }

    #[tokio::test]
    async fn test_resolve_years_reconciles_selected_year() {
        let doc = document("Zomervakantie", "midden", "2027-07-17", "2027-08-29");
        let source = LocalSource::new()
            .with_document(year(2026), doc.clone())
            .with_document(year(2027), doc);
        let session = HolidaySession::new(service(source));
        let before = session.generation();

        let years = session.resolve_years(2026).await;
        assert_eq!(*years, vec![year(2026), year(2027)]);
        assert_eq!(session.settings().school_year, year(2026));
        assert!(session.generation() > before);
        assert_eq!(*session.years(), vec![year(2026), year(2027)]);
    }

    #[tokio::test]
    async fn test_resolve_years_keeps_valid_selection() {
        let doc = document("Zomervakantie", "midden", "2026-07-18", "2026-08-30");
        let source = LocalSource::new()
            .with_document(year(2024), doc.clone())
            .with_document(year(2025), doc);
        let session = HolidaySession::new(service(source));
        let before = session.generation();

        session.resolve_years(2026).await;
        assert_eq!(session.settings().school_year, year(2025));
        assert_eq!(session.generation(), before);
    }

    #[tokio::test]
    async fn test_session_countdown_uses_selected_region() {
        let source = LocalSource::new().with_document(
            year(2025),
            json!({
                "content": [{
                    "vacations": [{
                        "type": "Voorjaarsvakantie",
                        "compulsorydates": "true",
                        "regions": [
                            { "region": "noord", "startdate": "2026-02-14", "enddate": "2026-02-22" },
                            { "region": "zuid", "startdate": "2026-02-21", "enddate": "2026-03-01" }
                        ]
                    }]
                }]
            }),
        );
        let session = HolidaySession::new(service(source));
        session.load_settings(Region::South, year(2025));
        session.refresh().await;

        let result = session.countdown(date(2026, 2, 11)).unwrap();
        assert_eq!(result.period.region(), Region::South);
        assert_eq!(result.days_remaining, 10);
        assert_eq!(result.season(), Season::Winter);

        assert_eq!(session.overview().len(), 1);
        session.set_region(Region::Middle);
        assert!(session.countdown(date(2026, 2, 11)).is_none());
    }
}
