use super::super::IntegrationHarness;
use repqr_onboarding::orchestration::WizardEventType;
use repqr_onboarding::profiles::Environment;
use repqr_onboarding::{Phase, WizardController};

/// PNG signature plus the start of an IHDR chunk; enough for format sniffing.
pub const PNG_HEADER: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

pub struct WizardFixture {
    harness: IntegrationHarness,
    pub wizard: WizardController,
}

impl WizardFixture {
    pub fn new() -> Self {
        let harness = IntegrationHarness::new();
        let wizard = harness.controller();
        Self { harness, wizard }
    }

    pub fn from_harness(harness: IntegrationHarness) -> Self {
        let wizard = harness.controller();
        Self { harness, wizard }
    }

    pub fn harness(&self) -> &IntegrationHarness {
        &self.harness
    }

    /// Picks a destination, lets the reveal finish and continues to Category.
    pub fn at_category(environment: Environment) -> Self {
        let mut fixture = Self::new();
        fixture.wizard.select_destination(environment);
        fixture.wizard.run_until_idle();
        fixture.wizard.advance();
        assert_eq!(fixture.wizard.phase(), Phase::Category);
        fixture
    }

    pub fn at_positioning(environment: Environment) -> Self {
        let mut fixture = Self::at_category(environment);
        fixture.wizard.advance();
        assert_eq!(fixture.wizard.phase(), Phase::Positioning);
        fixture
    }

    pub fn count(&self, event_type: WizardEventType) -> usize {
        self.wizard.event_log().of_type(event_type).count()
    }
}
