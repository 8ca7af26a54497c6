use super::*;

#[test]
fn validate_track_input_trims_all_fields() {
    assert_eq!(
        validate_track_input(" https://youtu.be/x ", " Title ", " Artist "),
        Ok((
            "https://youtu.be/x".to_owned(),
            "Title".to_owned(),
            "Artist".to_owned()
        ))
    );
}

#[test]
fn validate_track_input_rejects_any_empty_field() {
    assert_eq!(
        validate_track_input("", "Title", "Artist"),
        Err("Enter a track URL, title, and artist.")
    );
    assert_eq!(
        validate_track_input("https://youtu.be/x", "   ", "Artist"),
        Err("Enter a track URL, title, and artist.")
    );
    assert_eq!(
        validate_track_input("https://youtu.be/x", "Title", ""),
        Err("Enter a track URL, title, and artist.")
    );
}

#[test]
fn analyze_request_is_tagged_youtube_and_carries_uploader() {
    let request = analyze_request(
        "https://youtu.be/x".to_owned(),
        "Title".to_owned(),
        "Artist".to_owned(),
        3,
    );
    assert_eq!(request.source_platform, "youtube");
    assert_eq!(request.added_by, 3);
    assert_eq!(request.url, "https://youtu.be/x");
    assert_eq!(request.title, "Title");
    assert_eq!(request.artist_name, "Artist");
}
