pub mod wizard_fixture;
