/*!
 * Tests for the template parameterizer stage
 */

use flashgen::pipeline::template::parameterize;
use flashgen::region::{Region, RegionBody};

#[test]
fn test_parameterize_withNoPlaceholders_shouldLeaveRegionUnchanged() {
    let region = Region::plain("HTTP_HEAD", "<head>static</head>");

    let result = parameterize(region.clone());

    assert_eq!(result, region);
}

#[test]
fn test_parameterize_withOnePlaceholder_shouldSplitIntoTwoChunks() {
    let region = Region::plain("HTTP_ITEM", "Welcome {user}!");

    let result = parameterize(region);

    let RegionBody::Template { chunks, params } = result.body else {
        panic!("expected template body");
    };
    assert_eq!(chunks, vec!["Welcome ".to_string(), "!".to_string()]);
    assert_eq!(params, vec!["user".to_string()]);
}

#[test]
fn test_parameterize_withKPlaceholders_shouldProduceKPlusOneChunks() {
    let region = Region::plain("HTTP_ROW", "<td>{name}</td><td>{value}</td><td>{unit}</td>");

    let result = parameterize(region);

    let RegionBody::Template { chunks, params } = result.body else {
        panic!("expected template body");
    };
    assert_eq!(params.len(), 3);
    assert_eq!(chunks.len(), params.len() + 1);
}

#[test]
fn test_parameterize_withAnyContent_shouldReconstructOriginalByInterleaving() {
    let content = "{a}start{mid}end{z}";
    let region = Region::plain("HTTP_X", content);

    let result = parameterize(region);

    let RegionBody::Template { chunks, params } = result.body else {
        panic!("expected template body");
    };

    // Re-interleaving chunks with literal placeholder text reconstructs
    // the original content exactly
    let mut rebuilt = String::new();
    for (index, chunk) in chunks.iter().enumerate() {
        rebuilt.push_str(chunk);
        if let Some(param) = params.get(index) {
            rebuilt.push('{');
            rebuilt.push_str(param);
            rebuilt.push('}');
        }
    }
    assert_eq!(rebuilt, content);
}

#[test]
fn test_parameterize_withBoundaryPlaceholders_shouldKeepEmptyBoundaryChunks() {
    let region = Region::plain("HTTP_X", "{a}middle{b}");

    let result = parameterize(region);

    let RegionBody::Template { chunks, params } = result.body else {
        panic!("expected template body");
    };
    assert_eq!(chunks, vec!["".to_string(), "middle".to_string(), "".to_string()]);
    assert_eq!(params, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_parameterize_withRepeatedName_shouldPreserveDuplicates() {
    let region = Region::plain("HTTP_X", "{v} and {v}");

    let result = parameterize(region);

    let RegionBody::Template { params, .. } = result.body else {
        panic!("expected template body");
    };
    assert_eq!(params, vec!["v".to_string(), "v".to_string()]);
}

#[test]
fn test_parameterize_withNonLowercaseBraces_shouldNotMatch() {
    let region = Region::plain("HTTP_X", "css {Color} and {a1} stay literal");

    let result = parameterize(region.clone());

    // Uppercase or digit-bearing brace contents are not placeholders
    assert_eq!(result, region);
}
