use chrono::{NaiveDate, NaiveDateTime};

use crate::core::age::AgeBreakdown;
use crate::domain::model::{Request, SkillRequest, SkillResponse};
use crate::domain::ports::Clock;

pub const FAREWELL: &str = "Goodbye!";
pub const HELP: &str = "You can say tell me Edie's age! or how old is Elodie?";

/// Elodie's birth instant. A domain parameter, not configuration; the spoken
/// age is only compatible with the deployed skill if this stays exact.
pub fn birth_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 4, 26)
        .and_then(|d| d.and_hms_opt(13, 26, 0))
        .expect("hardcoded birth instant is a valid date")
}

/// Maps a skill request to its response text and session flag. Every branch
/// is total: unrecognised intents and request types degrade to the help text
/// instead of failing.
pub struct SkillRouter<C: Clock> {
    clock: C,
    birth: NaiveDateTime,
}

impl<C: Clock> SkillRouter<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            birth: birth_instant(),
        }
    }

    pub fn handle(&self, envelope: &SkillRequest) -> SkillResponse {
        self.route(&envelope.request)
    }

    pub fn route(&self, request: &Request) -> SkillResponse {
        // Single clock read per invocation; every branch that speaks the age
        // sees the same instant.
        let now = self.clock.now();

        match request {
            Request::Launch => {
                tracing::info!("LaunchRequest: speak the age");
                SkillResponse::plain_text(self.age_text(now), false)
            }
            Request::Intent { intent } => match intent.name.as_str() {
                "AMAZON.CancelIntent" | "AMAZON.StopIntent" => {
                    tracing::info!(intent = %intent.name, "send stop message");
                    SkillResponse::plain_text(FAREWELL.to_string(), true)
                }
                "AMAZON.HelpIntent" => {
                    tracing::info!("AMAZON.HelpIntent: send help message");
                    SkillResponse::plain_text(HELP.to_string(), false)
                }
                "ElodieAgeIntent" => {
                    tracing::info!("ElodieAgeIntent: speak the age");
                    SkillResponse::plain_text(self.age_text(now), false)
                }
                other => {
                    tracing::info!(intent = %other, "unknown intent, send help message");
                    SkillResponse::plain_text(HELP.to_string(), false)
                }
            },
            Request::Other => {
                tracing::info!("unhandled request type, send help message");
                SkillResponse::plain_text(HELP.to_string(), false)
            }
        }
    }

    fn age_text(&self, now: NaiveDateTime) -> String {
        AgeBreakdown::between(self.birth, now).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Intent;
    use crate::domain::ports::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2020, 5, 3)
                .unwrap()
                .and_hms_opt(15, 30, 0)
                .unwrap(),
        )
    }

    fn intent(name: &str) -> Request {
        Request::Intent {
            intent: Intent {
                name: name.to_string(),
                slots: None,
            },
        }
    }

    #[test]
    fn launch_speaks_age_and_keeps_session_open() {
        let router = SkillRouter::new(clock());
        let response = router.route(&Request::Launch);
        assert_eq!(
            response.speech_text(),
            AgeBreakdown::between(birth_instant(), clock().0).to_string()
        );
        assert!(!response.response.should_end_session);
    }

    #[test]
    fn cancel_and_stop_end_the_session() {
        let router = SkillRouter::new(clock());
        for name in ["AMAZON.CancelIntent", "AMAZON.StopIntent"] {
            let response = router.route(&intent(name));
            assert_eq!(response.speech_text(), FAREWELL);
            assert!(response.response.should_end_session);
        }
    }

    #[test]
    fn help_intent_returns_help_text() {
        let router = SkillRouter::new(clock());
        let response = router.route(&intent("AMAZON.HelpIntent"));
        assert_eq!(response.speech_text(), HELP);
        assert!(!response.response.should_end_session);
    }

    #[test]
    fn age_intent_matches_launch_text() {
        let router = SkillRouter::new(clock());
        let from_intent = router.route(&intent("ElodieAgeIntent"));
        let from_launch = router.route(&Request::Launch);
        assert_eq!(from_intent.speech_text(), from_launch.speech_text());
        assert!(!from_intent.response.should_end_session);
    }

    #[test]
    fn unknown_intent_falls_back_to_help() {
        let router = SkillRouter::new(clock());
        let response = router.route(&intent("FooBarIntent"));
        assert_eq!(response.speech_text(), HELP);
        assert!(!response.response.should_end_session);
    }

    #[test]
    fn unhandled_request_type_falls_back_to_help() {
        let router = SkillRouter::new(clock());
        let response = router.route(&Request::Other);
        assert_eq!(response.speech_text(), HELP);
        assert!(!response.response.should_end_session);
    }
}
