use anyhow::Result;
use repqr_onboarding::orchestration::WizardEventType;
use repqr_onboarding::profiles::{CustomSlot, Environment, MediaSlot, SocialField, SocialPlatform};

use crate::support::wizard_fixture::{WizardFixture, PNG_HEADER};

#[test]
fn uploads_become_data_urls() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Repqr);
    fixture.wizard.attach_image(MediaSlot::ProfilePhoto, PNG_HEADER);
    fixture.wizard.attach_image(MediaSlot::Logo, b"not an image");

    let profile = fixture.wizard.profile();
    let photo = profile.profile_photo.as_ref().map(|image| image.as_str());
    assert!(
        photo.is_some_and(|url| url.starts_with("data:image/png;base64,")),
        "unexpected photo reference: {photo:?}"
    );
    let logo = profile.logo.as_ref().map(|image| image.as_str());
    assert!(
        logo.is_some_and(|url| url.starts_with("data:application/octet-stream;base64,")),
        "unknown bytes still embed: {logo:?}"
    );
    assert_eq!(fixture.wizard.view().preview.photo, profile.profile_photo);
    assert_eq!(fixture.count(WizardEventType::MediaAttached), 2);
    Ok(())
}

#[test]
fn social_links_feed_the_preview() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Scanrep);
    let wizard = &mut fixture.wizard;
    for (platform, url) in [
        (SocialPlatform::Cashapp, "$miles"),
        (SocialPlatform::Facebook, "https://facebook.com/miles"),
        (SocialPlatform::X, "https://x.com/miles"),
        (SocialPlatform::Instagram, "https://instagram.com/miles"),
    ] {
        wizard.update_social_link(platform.into(), url);
    }
    wizard.update_social_link(SocialField::CustomLabel(CustomSlot::First), "Podcast");

    let preview = wizard.view().preview;
    let primary: Vec<_> = preview.primary_socials.iter().map(|link| link.platform).collect();
    assert_eq!(
        primary,
        vec![
            SocialPlatform::Facebook,
            SocialPlatform::Instagram,
            SocialPlatform::X
        ]
    );
    assert_eq!(preview.secondary_socials.len(), 1);
    assert_eq!(preview.connected_social_count, 5);
    assert!(wizard.is_social_input_visible(SocialPlatform::Cashapp));
    assert!(!wizard.is_social_input_visible(SocialPlatform::Youtube));
    Ok(())
}
