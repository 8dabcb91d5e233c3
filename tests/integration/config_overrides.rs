use anyhow::Result;
use repqr_onboarding::config::{self, WizardSettings};
use repqr_onboarding::profiles::Environment;
use repqr_onboarding::Phase;
use std::time::Duration;

use crate::support::wizard_fixture::WizardFixture;
use crate::IntegrationHarness;

#[test]
fn timings_from_config_drive_the_sequences() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut settings = WizardSettings::default();
    settings.timings.reveal_stage_ms = 200;
    settings.timings.reveal_total_ms = 500;
    settings.timings.copy_feedback_ms = 50;
    settings.progress.display_floor_percent = 90;
    harness.write_settings(&settings);

    let mut fixture = WizardFixture::from_harness(harness);
    assert_eq!(fixture.wizard.settings(), &settings);

    fixture.wizard.select_destination(Environment::Repqr);
    fixture.wizard.advance_clock(Duration::from_millis(500));
    assert!(!fixture.wizard.ui().reveal_loading);
    assert_eq!(
        fixture.wizard.view().display_progress,
        Some(90),
        "floor applies while completion is lower"
    );

    fixture.wizard.copy_rep_url();
    fixture.wizard.advance_clock(Duration::from_millis(50));
    assert_eq!(fixture.wizard.ui().copy_feedback.label(), "Copy");
    assert!(fixture.harness().config_path().exists());
    Ok(())
}

#[test]
fn home_variable_locates_the_config_file() -> Result<()> {
    let harness = IntegrationHarness::new();
    harness.export_home();
    assert_eq!(config::config_file_path()?, harness.config_path());
    assert_eq!(config::load_or_default()?, WizardSettings::default());

    let mut settings = WizardSettings::default();
    settings.timings.phase_fade_ms = 0;
    harness.write_settings(&settings);
    assert_eq!(config::load_or_default()?.timings.phase_fade_ms, 0);

    let mut fixture = WizardFixture::from_harness(harness);
    fixture.wizard.advance();
    assert_eq!(fixture.wizard.phase(), Phase::Reveal);
    fixture.wizard.advance_clock(Duration::ZERO);
    assert!(!fixture.wizard.ui().fading, "zero fade ends immediately");
    Ok(())
}
