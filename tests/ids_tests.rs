use marriage_bot::commands::economy::core::item;
use marriage_bot::interactions::ids::InteractionId;
use serenity::model::id::UserId;

fn ring(id: &str) -> &'static item::ShopItem {
    item::find_by_id(id).expect("catalog ring")
}

#[test]
fn every_kind_round_trips() {
    let (a, b) = (UserId::new(123456789012345678), UserId::new(42));
    let ids = [
        InteractionId::ShopBuy,
        InteractionId::RingSelect {
            proposer: a,
            target: b,
        },
        InteractionId::ProposalAccept {
            proposer: a,
            target: b,
            item: ring("eternal"),
        },
        InteractionId::ProposalReject {
            proposer: a,
            target: b,
        },
        InteractionId::DivorceConfirm {
            initiator: b,
            partner: a,
        },
        InteractionId::DivorceCancel {
            initiator: b,
            partner: a,
        },
    ];
    for id in ids {
        let encoded = id.to_string();
        let decoded: InteractionId = encoded.parse().expect("should parse");
        assert_eq!(decoded, id, "round trip of {}", encoded);
    }
}

#[test]
fn accept_id_carries_both_parties_and_the_ring() {
    let id = InteractionId::ProposalAccept {
        proposer: UserId::new(11),
        target: UserId::new(22),
        item: ring("gold"),
    };
    assert_eq!(id.to_string(), "marry_accept:11:22:gold");
    assert!(id.to_string().len() <= 100, "custom_id limit");
}

#[test]
fn malformed_ids_are_rejected() {
    let bad = [
        "",
        "shop_buy:1",
        "marry_accept:11:22",
        "marry_accept:11:22:platinum",
        "marry_accept:11:22:Gold",
        "marry_accept:11:22:gold:extra",
        "marry_reject:011:22",
        "marry_reject:+11:22",
        "marry_reject:0:22",
        "marry_reject:11:",
        "marry_ring:abc:22",
        "divorce_confirm:11:22:33",
        "divorce_cancel",
        "help_select_command",
        "marry_reject:99999999999999999999:1",
    ];
    for raw in bad {
        assert!(
            raw.parse::<InteractionId>().is_err(),
            "`{}` should not parse",
            raw
        );
    }
}
