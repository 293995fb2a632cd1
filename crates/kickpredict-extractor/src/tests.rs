//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{ExtractionMethod, Extractor, ExtractorConfig, ExtractorError, Strategy};
    use chrono::NaiveDate;
    use kickpredict_domain::{Category, CountryCode, ProjectRecord};
    use kickpredict_llm::MockProvider;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 7, 3)
    }

    fn local_only() -> Extractor<MockProvider> {
        Extractor::new(None, ExtractorConfig::default())
    }

    fn with_llm(llm: MockProvider) -> Extractor<MockProvider> {
        Extractor::new(Some(llm), ExtractorConfig::default())
    }

    #[tokio::test]
    async fn test_end_to_end_structured_message() {
        let message = "Analise meu projeto: Nome: power Categoria: Games Meta: $10,000 \
                       País: US Início: 2025-07-03 Fim: 2025-08-02";

        let extraction = local_only().extract_on(message, today()).await.unwrap();

        assert_eq!(extraction.method, ExtractionMethod::Local);
        let expected = ProjectRecord::new(
            "power",
            Category::Games,
            CountryCode::US,
            10_000.0,
            date(2025, 7, 3),
            date(2025, 8, 2),
        )
        .unwrap();
        assert_eq!(extraction.record, expected);
    }

    #[test]
    fn test_minimal_message_defaults() {
        let record = local_only()
            .extract_local_on("Nome: Lamp Categoria: design Meta: 2,500", today())
            .unwrap();
        assert_eq!(record.name(), "Lamp");
        assert_eq!(record.category(), Category::Design);
        assert_eq!(record.goal(), 2500.0);
        assert_eq!(record.country(), CountryCode::US);
        assert_eq!(record.launched(), today());
        assert_eq!(record.deadline(), date(2025, 8, 2));
    }

    #[test]
    fn test_deadline_before_launch_is_repaired() {
        let record = local_only()
            .extract_local_on(
                "Nome: power Categoria: Games Meta: 100 Início: 2025-07-03 Fim: 2025-07-01",
                today(),
            )
            .unwrap();
        assert_eq!(record.deadline(), date(2025, 8, 2));
    }

    #[test]
    fn test_goal_formats() {
        let cases = [
            ("Meta: 10,000", 10_000.0),
            ("Meta: 10.00", 10.0),
            ("Meta: 10.000", 10_000.0),
            ("Meta: 5k", 5_000.0),
            ("Meta: 20 mil reais", 20_000.0),
        ];
        for (goal, expected) in cases {
            let message = format!("Nome: power Categoria: Games {}", goal);
            let record = local_only().extract_local_on(&message, today()).unwrap();
            assert_eq!(record.goal(), expected, "goal text {:?}", goal);
        }
    }

    #[test]
    fn test_portuguese_category_and_country() {
        let record = local_only()
            .extract_local_on(
                "Nome: Sons da Vila Categoria: música Meta: 3000 País: brasil",
                today(),
            )
            .unwrap();
        assert_eq!(record.category(), Category::Music);
        assert_eq!(record.country().as_str(), "BR");
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let record = local_only()
            .extract_local_on("Nome: X1 Categoria: astronomia Meta: 3000", today())
            .unwrap();
        assert_eq!(record.category(), Category::Technology);
    }

    #[test]
    fn test_round_trip_through_structured_template() {
        let records = [
            ProjectRecord::new(
                "power",
                Category::Games,
                CountryCode::US,
                10_000.0,
                date(2025, 7, 3),
                date(2025, 8, 2),
            ),
            ProjectRecord::new(
                "Eco Bottle",
                Category::FilmVideo,
                CountryCode::parse("GB").unwrap(),
                2_500.5,
                date(2024, 1, 15),
                date(2024, 3, 1),
            ),
            ProjectRecord::new(
                "Pixel Quest 2",
                Category::Crafts,
                CountryCode::parse("JP").unwrap(),
                750.0,
                date(2025, 12, 1),
                date(2026, 1, 10),
            ),
        ];

        for record in records {
            let record = record.unwrap();
            let message = record.to_structured_message();
            let parsed = local_only().extract_local_on(&message, today()).unwrap();
            assert_eq!(parsed, record, "message: {}", message);
        }
    }

    #[tokio::test]
    async fn test_no_keywords_fails_without_record() {
        let failure = local_only()
            .extract_on("Olá! Como você está hoje?", today())
            .await
            .unwrap_err();

        assert_eq!(failure.attempts.len(), 1);
        assert_eq!(failure.attempts[0].strategy, Strategy::Local);
        assert!(matches!(
            failure.attempts[0].error,
            ExtractorError::MissingFields(_)
        ));
    }

    #[tokio::test]
    async fn test_llm_not_called_when_local_succeeds() {
        let llm = MockProvider::new("{}");
        let extractor = with_llm(llm.clone());

        extractor
            .extract_on("Nome: power Categoria: Games Meta: 100", today())
            .await
            .unwrap();
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_llm_fallback_success() {
        let llm = MockProvider::new(
            r#"Aqui está: {"name": "Jardim Vertical", "main_category": "Design",
            "country": "BR", "usd_goal_real": 8000, "launched": "2025-08-01",
            "deadline": "2025-09-15"}"#,
        );
        let extractor = with_llm(llm.clone());
        let message = "quero fazer jardins verticais para apartamentos pequenos";

        let extraction = extractor.extract_on(message, today()).await.unwrap();

        assert_eq!(
            extraction.method,
            ExtractionMethod::Remote {
                model: "mock".to_string()
            }
        );
        assert_eq!(extraction.record.name(), "Jardim Vertical");
        assert_eq!(extraction.record.goal(), 8000.0);
        assert_eq!(extraction.record.deadline(), date(2025, 9, 15));

        let request = llm.last_request().unwrap();
        assert_eq!(request.temperature, 0.1);
        assert_eq!(request.messages.last().unwrap().content, message);
    }

    #[tokio::test]
    async fn test_llm_country_name_is_normalized() {
        let llm = MockProvider::new(
            r#"{"name": "Festa Junina", "main_category": "Music", "country": "Brasil",
            "usd_goal_real": 5000}"#,
        );

        let extraction = with_llm(llm)
            .extract_on("quero organizar uma festa junina", today())
            .await
            .unwrap();

        assert_eq!(extraction.record.country().as_str(), "BR");
        assert_eq!(extraction.record.category(), Category::Music);
    }

    #[tokio::test]
    async fn test_llm_fallback_failure_lists_both_strategies() {
        let extractor = with_llm(MockProvider::failing());

        let failure = extractor.extract_on("oi", today()).await.unwrap_err();

        assert_eq!(failure.attempts.len(), 2);
        assert_eq!(failure.attempts[0].strategy, Strategy::Local);
        assert_eq!(failure.attempts[1].strategy, Strategy::Remote);
        assert!(matches!(failure.attempts[1].error, ExtractorError::Llm(_)));
    }

    #[tokio::test]
    async fn test_llm_garbage_is_failure() {
        let extractor = with_llm(MockProvider::new("Desculpe, não sei."));

        let failure = extractor.extract_on("oi", today()).await.unwrap_err();
        assert!(matches!(
            failure.attempts[1].error,
            ExtractorError::InvalidFormat(_)
        ));
    }

    #[tokio::test]
    async fn test_llm_timeout() {
        let llm = MockProvider::new("{}").with_delay(Duration::from_secs(5));
        let extractor = Extractor::new(
            Some(llm),
            ExtractorConfig {
                llm_timeout_secs: 1,
                ..Default::default()
            },
        );

        let failure = extractor.extract_on("oi", today()).await.unwrap_err();
        assert!(matches!(failure.attempts[1].error, ExtractorError::Timeout));
    }

    mod round_trip {
        use crate::{Extractor, ExtractorConfig};
        use chrono::{Days, NaiveDate};
        use kickpredict_domain::Category;
        use kickpredict_llm::MockProvider;
        use proptest::prelude::*;

        const NAME_TOKENS: &[&str] = &[
            "Robo", "Festa", "Eco", "Lamp", "Pixel", "Quest", "Kit", "pessoas", "3D", "2", "20",
            "5k", "mil", "k", "brasil", "jogos",
        ];

        const COUNTRIES: &[&str] = &["US", "BR", "GB", "JP", "CA"];

        fn goal_text(cents: u64) -> String {
            if cents % 100 == 0 {
                (cents / 100).to_string()
            } else {
                format!("{}.{:02}", cents / 100, cents % 100)
            }
        }

        proptest! {
            #[test]
            fn structured_template_round_trips(
                words in prop::collection::vec(prop::sample::select(NAME_TOKENS), 1..5),
                category in prop::sample::select(Category::ALL.to_vec()),
                country in prop::sample::select(COUNTRIES),
                cents in 1u64..100_000_000,
                start in 0u64..700,
                days in 1u64..120,
            ) {
                let extractor: Extractor<MockProvider> =
                    Extractor::new(None, ExtractorConfig::default());
                let today = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
                let launched = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(start);
                let deadline = launched + Days::new(days);

                let message = format!(
                    "Nome: {} Categoria: {} Meta: ${} País: {} Início: {} Fim: {}",
                    words.join(" "),
                    category,
                    goal_text(cents),
                    country,
                    launched,
                    deadline,
                );

                let first = extractor.extract_local_on(&message, today).unwrap();
                prop_assert_eq!(first.goal(), cents as f64 / 100.0);

                let again = extractor
                    .extract_local_on(&first.to_structured_message(), today)
                    .unwrap();
                prop_assert_eq!(again, first);
            }
        }
    }
}
