use astro_happiness::content::{self, InsightCategory};
use astro_happiness::{BirthDate, Event, Field, FormInput, Planner, Sign, State, SubmitError, classify_str};

#[test]
fn test_cancer_report_end_to_end() {
    let mut planner = Planner::new();
    planner.handle(Event::Edit(Field::Date, "1990-07-04".to_owned())).unwrap();
    planner.handle(Event::Submit).unwrap();

    let report = planner.report().expect("submit should produce a report");
    assert_eq!(report.sign(), Sign::Cancer);

    let record = report.record();
    assert_eq!(record.sign, Sign::Cancer);
    assert_eq!(
        record.overview,
        "Nurturing and intuitive, Cancer is deeply connected to home and family. Your emotional depth allows you to empathize and care for others."
    );
    assert_eq!(
        record.insights.get(InsightCategory::Faith),
        "Connect to your inner world through journaling or creative expression. Reflecting on emotions helps you find meaning."
    );
    assert_eq!(
        record.insights.get(InsightCategory::Family),
        "Prioritize time with family and close friends. Your nurturing presence brings safety and love to those around you."
    );
    assert_eq!(
        record.insights.get(InsightCategory::Work),
        "Seek roles where you can support and care for others, whether through teaching, healing, or creating safe spaces."
    );
    assert_eq!(
        record.insights.get(InsightCategory::Service),
        "Volunteer in community projects that protect and uplift vulnerable groups. Your empathy makes a difference."
    );
}

#[test]
fn test_reset_after_any_sign() {
    let dates = [
        "2000-03-21", "2000-04-20", "2000-05-21", "2000-06-21", "2000-07-23", "2000-08-23",
        "2000-09-23", "2000-10-23", "2000-11-22", "2000-12-22", "2000-01-20", "2000-02-19",
    ];

    for (date, expected) in dates.into_iter().zip(Sign::ALL) {
        let mut planner = Planner::with_form(FormInput {
            date: date.to_owned(),
            ..FormInput::default()
        });
        assert_eq!(planner.submit(), Ok(expected), "{date}");
        planner.handle(Event::Reset).unwrap();
        assert_eq!(planner.state(), &State::Input, "{date}");
        assert!(planner.report().is_none());
    }
}

#[test]
fn test_empty_date_never_leaves_input() {
    let mut planner = Planner::with_form(FormInput {
        name: "Ada".to_owned(),
        time: "08:15".to_owned(),
        place: "London, UK".to_owned(),
        ..FormInput::default()
    });
    assert_eq!(planner.handle(Event::Submit), Err(SubmitError::MissingDate));
    assert_eq!(planner.state(), &State::Input);
}

#[test]
fn test_every_classified_sign_has_content() {
    for year in [1999u16, 2000] {
        for month in 1..=12u8 {
            for day in 1..=31u8 {
                let Ok(date) = BirthDate::new(year, month, day) else {
                    continue;
                };
                let sign = date.sign();
                assert_eq!(content::lookup(sign).sign, sign);
                assert_eq!(classify_str(&date.to_string()), Ok(sign));
            }
        }
    }
}
