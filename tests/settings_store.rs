//! Load/save behavior of the settings store against an in-memory backend.

use android_build_pipeline::PipelineError;
use android_build_pipeline::host::StaticHostDefaults;
use android_build_pipeline::prefs::{MemoryPreferences, PrefValue, PreferenceBackend};
use android_build_pipeline::settings::{
    BuildOptions, BuildSettings, DEFAULT_DATE_TIME_FORMAT, DEFAULT_NAME_FORMAT, SettingsStore,
    SettingsStoreBuilder, keys,
};

fn store_with(
    backend: MemoryPreferences,
    host: StaticHostDefaults,
) -> SettingsStore<MemoryPreferences, StaticHostDefaults> {
    SettingsStoreBuilder::new()
        .backend(backend)
        .host(host)
        .build()
        .expect("store builds")
}

fn empty_store() -> SettingsStore<MemoryPreferences, StaticHostDefaults> {
    store_with(MemoryPreferences::new(), StaticHostDefaults::default())
}

fn full_record() -> BuildSettings {
    BuildSettings {
        build_path: "/tmp/builds".into(),
        name_format: "{name}-{version}".into(),
        date_time_format: "yyyy-MM-dd".into(),
        increment_bundle: true,
        build_options: BuildOptions::DEVELOPMENT | BuildOptions::ALLOW_DEBUGGING,
        use_keystore: true,
        is_build_app_bundle: true,
        is_split_app_binary: true,
        keystore_name: "release.keystore".into(),
        keystore_pass: "store-secret".into(),
        keyalias_name: "upload".into(),
        keyalias_pass: "alias-secret".into(),
    }
}

#[test]
fn empty_backend_loads_documented_defaults() {
    let store = empty_store();

    let settings = store.load().expect("defaults load without error");

    assert_eq!(settings.build_path, "");
    assert_eq!(settings.name_format, DEFAULT_NAME_FORMAT);
    assert_eq!(settings.name_format, "{package}_{date}");
    assert_eq!(settings.date_time_format, DEFAULT_DATE_TIME_FORMAT);
    assert!(!settings.increment_bundle);
    assert!(settings.build_options.is_empty());
    assert!(!settings.use_keystore);
    assert!(!settings.is_build_app_bundle);
    assert!(!settings.is_split_app_binary);
    assert_eq!(settings.keystore_name, "");
    assert_eq!(settings.keystore_pass, "");
    assert_eq!(settings.keyalias_name, "");
    assert_eq!(settings.keyalias_pass, "");
    assert_eq!(settings, BuildSettings::default());
}

#[test]
fn save_then_load_round_trips_every_field() {
    let mut store = empty_store();
    let record = full_record();

    store.save(&record).expect("save");
    let loaded = store.load().expect("load");

    assert_eq!(loaded, record);
}

#[test]
fn round_trip_preserves_unknown_option_bits() {
    let mut store = empty_store();
    let mut record = BuildSettings::default();
    record.build_options = BuildOptions::from_bits(1 << 30 | 1);

    store.save(&record).expect("save");

    assert_eq!(store.load().expect("load").build_options.bits(), 1 << 30 | 1);
}

#[test]
fn clearing_keystore_name_removes_key_and_restores_default() {
    let mut store = empty_store();
    let mut record = full_record();
    store.save(&record).expect("first save");

    record.keystore_name.clear();
    store.save(&record).expect("second save");

    let key = store.key(keys::KEYSTORE_NAME);
    assert!(!store.backend().has_key(&key));
    assert_eq!(store.load().expect("load").keystore_name, "");
}

#[test]
fn clearing_keystore_name_falls_back_to_host_default() {
    let host = StaticHostDefaults {
        keystore_name: "host.keystore".into(),
        ..Default::default()
    };
    let mut store = store_with(MemoryPreferences::new(), host);
    let mut record = full_record();
    store.save(&record).expect("first save");
    assert_eq!(store.load().expect("load").keystore_name, "release.keystore");

    record.keystore_name.clear();
    store.save(&record).expect("second save");

    assert_eq!(store.load().expect("load").keystore_name, "host.keystore");
}

#[test]
fn clearing_secrets_and_alias_removes_their_keys() {
    let mut store = empty_store();
    let mut record = full_record();
    store.save(&record).expect("first save");

    record.keyalias_name.clear();
    record.keystore_pass.clear();
    record.keyalias_pass.clear();
    store.save(&record).expect("second save");

    for suffix in [keys::KEYALIAS_NAME, keys::KEYSTORE_PASS, keys::KEYALIAS_PASS] {
        assert!(
            !store.backend().has_key(&store.key(suffix)),
            "{suffix} should be removed"
        );
    }

    let loaded = store.load().expect("load");
    assert_eq!(loaded.keyalias_name, "");
    assert_eq!(loaded.keystore_pass, "");
    assert_eq!(loaded.keyalias_pass, "");
}

#[test]
fn empty_fields_are_never_written_on_a_fresh_backend() {
    let mut store = empty_store();

    store.save(&BuildSettings::default()).expect("save");

    for suffix in [
        keys::KEYSTORE_NAME,
        keys::KEYALIAS_NAME,
        keys::KEYSTORE_PASS,
        keys::KEYALIAS_PASS,
    ] {
        assert!(!store.backend().has_key(&store.key(suffix)));
    }
    assert_eq!(store.backend().len(), 8);
}

#[test]
fn secrets_are_encoded_at_rest() {
    let mut store = empty_store();
    let mut record = BuildSettings::default();
    record.keystore_pass = "p@ss".into();

    store.save(&record).expect("save");

    let key = store.key(keys::KEYSTORE_PASS);
    let raw = store.backend().get_string(&key).expect("secret stored");
    assert_ne!(raw, "p@ss");
    assert_eq!(raw, "cEBzcw==");
    assert_eq!(store.load().expect("load").keystore_pass, "p@ss");
}

#[test]
fn non_ascii_secret_round_trips() {
    let mut store = empty_store();
    let mut record = BuildSettings::default();
    record.keyalias_pass = "pässwörd ✓".into();

    store.save(&record).expect("save");

    assert_eq!(store.load().expect("load").keyalias_pass, "pässwörd ✓");
}

#[test]
fn corrupt_secret_is_reported_not_reset() {
    let mut backend = MemoryPreferences::new();
    let key = format!("{}{}", keys::DEFAULT_NAMESPACE, keys::KEYSTORE_PASS);
    backend.set_string(&key, "%%% not base64 %%%");
    let store = store_with(backend, StaticHostDefaults::default());

    let err = store.load().expect_err("corrupt secret must fail");

    match err {
        PipelineError::CorruptSettings { key: bad_key, .. } => assert_eq!(bad_key, key),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn secret_decoding_to_invalid_utf8_is_corrupt() {
    let mut backend = MemoryPreferences::new();
    let key = format!("{}{}", keys::DEFAULT_NAMESPACE, keys::KEYALIAS_PASS);
    // 0xff 0xfe
    backend.set_string(&key, "//4=");
    let store = store_with(backend, StaticHostDefaults::default());

    assert!(matches!(
        store.load(),
        Err(PipelineError::CorruptSettings { .. })
    ));
}

#[test]
fn empty_stored_secret_is_not_decoded() {
    let mut backend = MemoryPreferences::new();
    backend.set_string(
        &format!("{}{}", keys::DEFAULT_NAMESPACE, keys::KEYSTORE_PASS),
        "",
    );
    let store = store_with(backend, StaticHostDefaults::default());

    assert_eq!(store.load().expect("load").keystore_pass, "");
}

#[test]
fn host_defaults_apply_only_when_keys_are_absent() {
    let host = StaticHostDefaults {
        build_location: "out/android".into(),
        build_app_bundle: true,
        split_application_binary: true,
        keystore_name: "host.keystore".into(),
    };
    let mut store = store_with(MemoryPreferences::new(), host);

    let defaults = store.load().expect("load");
    assert!(defaults.is_build_app_bundle);
    assert!(defaults.is_split_app_binary);
    assert_eq!(defaults.keystore_name, "host.keystore");
    // Host build location is opt-in
    assert_eq!(defaults.build_path, "");

    let mut record = defaults.clone();
    record.is_build_app_bundle = false;
    record.is_split_app_binary = false;
    store.save(&record).expect("save");

    let loaded = store.load().expect("load");
    assert!(!loaded.is_build_app_bundle);
    assert!(!loaded.is_split_app_binary);
}

#[test]
fn host_default_path_option_uses_host_build_location() {
    let host = StaticHostDefaults {
        build_location: "out/android".into(),
        ..Default::default()
    };
    let store = SettingsStoreBuilder::new()
        .backend(MemoryPreferences::new())
        .host(host)
        .use_host_default_path(true)
        .build()
        .expect("store builds");

    assert_eq!(store.load().expect("load").build_path, "out/android");
    assert!(store.options().use_host_default_path);
    assert_eq!(store.options().namespace, keys::DEFAULT_NAMESPACE);
    assert_eq!(store.host().build_location, "out/android");
}

#[test]
fn flags_use_the_stored_encodings() {
    let mut store = empty_store();
    let mut record = BuildSettings::default();
    record.increment_bundle = true;
    record.use_keystore = true;

    store.save(&record).expect("save");

    let backend = store.backend();
    assert_eq!(
        backend.raw(&store.key(keys::INCREMENT_BUNDLE)),
        Some(&PrefValue::Str("True".into()))
    );
    assert_eq!(
        backend.raw(&store.key(keys::USE_KEYSTORE)),
        Some(&PrefValue::Int(1))
    );
    assert_eq!(
        backend.raw(&store.key(keys::IS_BUILD_APP_BUNDLE)),
        Some(&PrefValue::Int(0))
    );
}

#[test]
fn wrongly_typed_values_fall_back_to_defaults() {
    let mut backend = MemoryPreferences::new();
    let ns = keys::DEFAULT_NAMESPACE;
    backend.set_string(&format!("{ns}{}", keys::USE_KEYSTORE), "1");
    backend.set_int(&format!("{ns}{}", keys::NAME_FORMAT), 7);
    backend.set_string(&format!("{ns}{}", keys::INCREMENT_BUNDLE), "yes");
    let store = store_with(backend, StaticHostDefaults::default());

    let settings = store.load().expect("load");

    assert!(!settings.use_keystore);
    assert_eq!(settings.name_format, DEFAULT_NAME_FORMAT);
    assert!(!settings.increment_bundle);
}

#[test]
fn namespace_prefixes_every_key() {
    let mut store = SettingsStoreBuilder::new()
        .backend(MemoryPreferences::new())
        .host(StaticHostDefaults::default())
        .namespace("studio.game.")
        .build()
        .expect("store builds");

    store.save(&full_record()).expect("save");

    let backend = store.into_backend();
    assert_eq!(backend.len(), keys::ALL.len());
    assert!(backend.keys().all(|k| k.starts_with("studio.game.")));
}

#[test]
fn load_is_last_call_wins() {
    let mut store = empty_store();
    let first = store.load().expect("load");

    let mut changed = first.clone();
    changed.name_format = "{bundle}".into();
    store.save(&changed).expect("save");

    assert_eq!(store.load().expect("load"), changed);
    assert_eq!(store.load().expect("load"), changed);
}

#[test]
fn builder_requires_backend_and_host() {
    let missing_host = SettingsStoreBuilder::<MemoryPreferences, StaticHostDefaults>::new()
        .backend(MemoryPreferences::new())
        .build();
    assert!(matches!(missing_host, Err(PipelineError::Config { .. })));

    let missing_backend = SettingsStoreBuilder::<MemoryPreferences, StaticHostDefaults>::new()
        .host(StaticHostDefaults::default())
        .build();
    assert!(matches!(missing_backend, Err(PipelineError::Config { .. })));

    let empty_namespace = SettingsStoreBuilder::new()
        .backend(MemoryPreferences::new())
        .host(StaticHostDefaults::default())
        .namespace("")
        .build();
    assert!(matches!(empty_namespace, Err(PipelineError::Config { .. })));
}

#[test]
fn debug_output_redacts_passwords() {
    let rendered = format!("{:?}", full_record());

    assert!(!rendered.contains("store-secret"));
    assert!(!rendered.contains("alias-secret"));
    assert!(rendered.contains("release.keystore"));
}

#[test]
fn build_options_parse_names_and_integers() {
    let parsed: BuildOptions = "Development|allowdebugging".parse().expect("parse");
    assert_eq!(parsed, BuildOptions::DEVELOPMENT | BuildOptions::ALLOW_DEBUGGING);
    assert_eq!(parsed.to_string(), "Development|AllowDebugging");

    let raw: BuildOptions = "513".parse().expect("parse");
    assert_eq!(raw, parsed);

    assert_eq!("None".parse::<BuildOptions>().expect("parse"), BuildOptions::empty());
    assert_eq!(BuildOptions::empty().to_string(), "None");
    assert!("Turbo".parse::<BuildOptions>().is_err());

    let mut opts = parsed;
    opts.remove(BuildOptions::DEVELOPMENT);
    assert_eq!(opts, BuildOptions::ALLOW_DEBUGGING);
    assert_eq!(BuildOptions::from_bits(1 << 29 | 1).to_string(), "Development|536870912");
}
