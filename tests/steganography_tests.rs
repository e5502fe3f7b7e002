use lsb_canvas::error::StegoError;
use lsb_canvas::steganography::{
    capacity_bits, decode_text, embed, encode_text, extract,
};
use rand::{Rng, RngCore};

/// 生成带 54 字节头部空间的随机载体
fn random_carrier(len: usize) -> Vec<u8> {
    let mut pix = vec![0u8; len];
    rand::rng().fill_bytes(&mut pix);
    pix
}

/// 随机载体与随机 ASCII 消息的往返
#[test]
fn test_embed_and_extract_roundtrip() -> anyhow::Result<()> {
    let mut rng = rand::rng();

    for _ in 0..32 {
        let len = rng.random_range(0..64);
        let message: Vec<u8> = (0..len).map(|_| rng.random_range(1u8..=0x7F)).collect();
        let mut pix = random_carrier(54 + (len + 1) * 8 + rng.random_range(0..32));

        embed(&mut pix, &message, 54)?;
        let extraction = extract(&pix, 54);

        assert!(extraction.terminated);
        assert_eq!(extraction.message, message);
    }

    Ok(())
}

/// 只修改最低有效位，且不碰头部和消息之后的字节
#[test]
fn test_embed_only_touches_low_bits() -> anyhow::Result<()> {
    let original = random_carrier(200);
    let mut pix = original.clone();

    embed(&mut pix, b"hi", 54)?;

    assert_eq!(&pix[..54], &original[..54]);
    for (after, before) in pix[54..].iter().zip(&original[54..]) {
        assert_eq!(after & 0xFE, before & 0xFE);
    }
    assert_eq!(&pix[54 + 24..], &original[54 + 24..]);

    // 'h' = 0x68，低位在前
    let bits: Vec<u8> = pix[54..62].iter().map(|b| b & 1).collect();
    assert_eq!(bits, vec![0, 0, 0, 1, 0, 1, 1, 0]);

    Ok(())
}

/// 恰好填满载体时成功，多一个比特就失败
#[test]
fn test_capacity_boundary() -> anyhow::Result<()> {
    let message = b"exact";
    let needed = (message.len() + 1) * 8;

    let mut pix = random_carrier(54 + needed);
    assert_eq!(capacity_bits(&pix, 54), needed);
    embed(&mut pix, message, 54)?;
    assert_eq!(extract(&pix, 54).into_message()?, message.to_vec());

    let original = random_carrier(54 + needed - 1);
    let mut pix = original.clone();
    assert_eq!(
        embed(&mut pix, message, 54),
        Err(StegoError::MessageTooLarge {
            required_bits: needed,
            available_bits: needed - 1
        })
    );
    assert_eq!(pix, original, "a rejected message must not modify the carrier");

    Ok(())
}

/// 空消息只写入一个结束字节
#[test]
fn test_empty_message() -> anyhow::Result<()> {
    let mut pix = vec![0xFFu8; 54 + 16];

    embed(&mut pix, b"", 54)?;

    assert!(pix[54..62].iter().all(|&b| b == 0xFE));
    assert!(pix[62..].iter().all(|&b| b == 0xFF));

    let extraction = extract(&pix, 54);
    assert!(extraction.terminated);
    assert!(extraction.message.is_empty());

    Ok(())
}

#[test]
fn test_empty_message_needs_room_for_terminator() {
    let mut pix = vec![0u8; 54 + 7];
    assert!(matches!(
        embed(&mut pix, b"", 54),
        Err(StegoError::MessageTooLarge { .. })
    ));

    let mut header_only = vec![0u8; 20];
    assert_eq!(
        embed(&mut header_only, b"", 54),
        Err(StegoError::MessageTooLarge {
            required_bits: 8,
            available_bits: 0
        })
    );
}

#[test]
fn test_embed_rejects_interior_nul() {
    let mut pix = vec![0u8; 200];
    assert_eq!(
        embed(&mut pix, b"ab\0cd", 54),
        Err(StegoError::InteriorNul { index: 2 })
    );
}

/// 找不到结束标记时返回已解码的全部字节
#[test]
fn test_extract_without_terminator() {
    // 每个载体字节的最低位都是 1 -> 解码出 0xFF
    let pix = vec![0x01u8; 54 + 8 * 3 + 5];

    let extraction = extract(&pix, 54);
    assert!(!extraction.terminated);
    assert_eq!(extraction.message, vec![0xFF; 3]);
    assert_eq!(
        extraction.into_message(),
        Err(StegoError::MissingTerminator { decoded: 3 })
    );
}

#[test]
fn test_extract_past_end_of_buffer() {
    let extraction = extract(&[0u8; 10], 54);
    assert!(!extraction.terminated);
    assert!(extraction.message.is_empty());
}

/// 单字节文本 (Latin-1) 编码策略
#[test]
fn test_text_encoding_policy() -> anyhow::Result<()> {
    let text = "Hello, café ±½ÿ";
    let bytes = encode_text(text)?;
    assert_eq!(bytes.len(), text.chars().count());
    assert_eq!(bytes[10], 0xE9);
    assert_eq!(decode_text(&bytes), text);

    assert_eq!(
        encode_text("ok 中文"),
        Err(StegoError::UnencodableCharacter {
            character: '中',
            index: 3
        })
    );
    assert_eq!(
        encode_text("a\0b"),
        Err(StegoError::InteriorNul { index: 1 })
    );
    assert_eq!(encode_text("")?, Vec::<u8>::new());

    Ok(())
}

/// 非 ASCII 的单字节文本也能往返
#[test]
fn test_latin1_text_roundtrip() -> anyhow::Result<()> {
    let text = "naïve façade, 100¤ or 50£?";
    let mut pix = random_carrier(54 + 8 * 64);

    embed(&mut pix, &encode_text(text)?, 54)?;
    let recovered = decode_text(&extract(&pix, 54).into_message()?);

    assert_eq!(recovered, text);
    Ok(())
}
