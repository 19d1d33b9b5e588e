use super::*;

#[test]
fn detail_paths_append_id_with_trailing_slash() {
    assert_eq!(Resource::Tracks.detail(4), "tracks_app/tracks/4/");
    assert_eq!(Resource::Choices.detail(81), "exams_app/choices/81/");
}

#[test]
fn lists_scope_to_parent_when_keyed() {
    assert_eq!(Resource::Subjects.list(Some(2)), "tracks_app/subjects/?track=2");
    assert_eq!(Resource::Notes.list(Some(7)), "contents_app/notes/?chapter=7");
    assert_eq!(Resource::UniversityExams.list(Some(3)), "exams_app/university-exams/?university=3");
    assert_eq!(Resource::Tracks.list(Some(1)), "tracks_app/tracks/");
    assert_eq!(Resource::Chapters.list(None), "tracks_app/chapters/");
}

#[test]
fn only_exam_collections_import() {
    assert_eq!(Resource::TrackExams.import().as_deref(), Some("exams_app/track-exams/import/"));
    assert_eq!(
        Resource::UniversityExams.import().as_deref(),
        Some("exams_app/university-exams/import/")
    );
    assert_eq!(Resource::Notes.import(), None);
}

#[test]
fn slugs_round_trip() {
    for resource in Resource::ALL {
        assert_eq!(Resource::from_slug(resource.slug()), Some(resource));
    }
    assert_eq!(Resource::from_slug("lectures"), None);
}

#[test]
fn with_query_appends_to_existing_query() {
    assert_eq!(with_query("a/", &[]), "a/");
    assert_eq!(
        with_query("exams_app/track-exams/", &[("exam_type", "grand".to_owned()), ("subject", "9".to_owned())]),
        "exams_app/track-exams/?exam_type=grand&subject=9"
    );
    assert_eq!(with_query("a/?x=1", &[("y", "2".to_owned())]), "a/?x=1&y=2");
}

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("http://api.test/", "/tracks_app/tracks/"), "http://api.test/tracks_app/tracks/");
    assert_eq!(join_url("http://api.test", "tracks_app/tracks/"), "http://api.test/tracks_app/tracks/");
}
