// tests/core/layout.rs
use bcrypt_kdf::consts::MAX_KEY_LEN;
use bcrypt_kdf::kdf::OutputLayout;

#[test]
fn test_stride_and_amt() {
    let cases = [
        (1, 1, 1),
        (32, 1, 32),
        (33, 2, 17),
        (64, 2, 32),
        (98, 4, 25),
        (100, 4, 25),
        (1024, 32, 32),
    ];
    for (key_len, stride, amt) in cases {
        let layout = OutputLayout::new(key_len);
        assert_eq!(layout.stride(), stride, "stride for {key_len}");
        assert_eq!(layout.amt(), amt, "amt for {key_len}");
    }
}

#[test]
fn test_destination_index_interleaves_blocks() {
    let layout = OutputLayout::new(64);
    for i in 0..32 {
        assert_eq!(layout.destination_index(1, i), Some(i * 2));
        assert_eq!(layout.destination_index(2, i), Some(i * 2 + 1));
    }
}

#[test]
fn test_destination_index_past_end_is_none() {
    let layout = OutputLayout::new(98);
    assert_eq!(layout.destination_index(3, 23), Some(94));
    assert_eq!(layout.destination_index(3, 24), None);
    assert_eq!(layout.destination_index(4, 24), None);
}

#[test]
fn test_scatter_short_final_blocks() {
    let layout = OutputLayout::new(98);
    let mut key = vec![0u8; 98];
    let mut remaining = 98;
    let mut per_block = Vec::new();

    for block in 1u32..=4 {
        let written = layout.scatter(block, &[block as u8; 32], remaining, &mut key);
        per_block.push(written);
        remaining -= written;
    }

    assert_eq!(per_block, vec![25, 25, 24, 24]);
    assert_eq!(remaining, 0);
    for (idx, byte) in key.iter().enumerate() {
        assert_eq!(*byte as usize, idx % 4 + 1, "byte {idx}");
    }
}

#[test]
fn test_every_key_length_is_written_exactly_once() {
    for key_len in 1..=MAX_KEY_LEN {
        let layout = OutputLayout::new(key_len);
        let mut key = vec![0u8; key_len];
        let mut remaining = key_len;
        let mut total = 0;
        let mut block = 1u32;

        while remaining > 0 {
            let written = layout.scatter(block, &[0xff; 32], remaining, &mut key);
            assert!(written > 0, "stalled at block {block} for {key_len}");
            remaining -= written;
            total += written;
            block += 1;
        }

        // key_len writes covering key_len positions: each hit exactly once
        assert_eq!(total, key_len);
        assert!(key.iter().all(|b| *b == 0xff), "gap for {key_len}");
        assert_eq!(block as usize - 1, layout.stride(), "block count for {key_len}");
    }
}
