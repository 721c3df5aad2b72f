mod support;

use backend::db::txn::with_txn;
use backend::entities::players::{Profession, Race};
use backend::errors::domain::{DomainError, NotFoundKind};
use backend::services::players::{PlayersService, UpdatePlayer, EXPERIENCE_MAX};
use backend::AppError;
use time::macros::datetime;

use crate::support::build_test_state;
use crate::support::factory::{create_input, seed_player};

#[tokio::test]
async fn test_create_assigns_id_and_derives_progression() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let created = seed_player(txn, "Borin", 0).await?;

            assert!(created.id > 0);
            assert_eq!(created.level, 0);
            assert_eq!(created.until_next_level, 100);
            // banned defaults to false when the caller leaves it out
            assert!(!created.banned);

            let refetched = PlayersService.get_by_id(txn, created.id).await?;
            assert_eq!(refetched, created);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_create_accepts_all_boundary_values() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let mut input = create_input("Longname");
            input.name = "a".repeat(12);
            input.title = "t".repeat(30);
            input.birthday = datetime!(2000-01-01 0:00 UTC);
            input.experience = EXPERIENCE_MAX;
            let created = PlayersService.create(txn, input).await?;
            assert_eq!(created.level, 446);
            assert_eq!(created.until_next_level, 12_800);

            let mut input = create_input("Latest");
            input.birthday = datetime!(3000-12-31 23:59 UTC);
            PlayersService.create(txn, input).await?;

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_out_of_range_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let mut input = create_input("Borin");
            input.name = "a".repeat(13);
            let err = PlayersService.create(txn, input).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "got {err:?}");

            let mut input = create_input("Borin");
            input.title = "t".repeat(31);
            let err = PlayersService.create(txn, input).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));

            let mut input = create_input("Borin");
            input.birthday = datetime!(1999-12-31 23:59 UTC);
            let err = PlayersService.create(txn, input).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));

            let mut input = create_input("Borin");
            input.birthday = datetime!(3001-01-01 0:00 UTC);
            let err = PlayersService.create(txn, input).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));

            let mut input = create_input("Borin");
            input.experience = -1;
            let err = PlayersService.create(txn, input).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));

            let mut input = create_input("Borin");
            input.experience = EXPERIENCE_MAX + 1;
            let err = PlayersService.create(txn, input).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));

            // Nothing was written along the way
            let total = PlayersService.count(txn, &Default::default()).await?;
            assert_eq!(total, 0);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_get_by_id_checks_argument_before_storage() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let err = PlayersService.get_by_id(txn, 0).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));

            let err = PlayersService.get_by_id(txn, -5).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));

            let err = PlayersService.get_by_id(txn, 424_242).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::NotFound(NotFoundKind::Player, _)
            ));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_update_with_experience_only_recomputes_from_merged_record() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let created = seed_player(txn, "Aeliana", 0).await?;

            let updated = PlayersService
                .update(
                    txn,
                    created.id,
                    UpdatePlayer {
                        experience: Some(100),
                        ..Default::default()
                    },
                )
                .await?;

            // Only experience and the derived fields moved
            assert_eq!(updated.name, created.name);
            assert_eq!(updated.title, created.title);
            assert_eq!(updated.race, created.race);
            assert_eq!(updated.profession, created.profession);
            assert_eq!(updated.birthday, created.birthday);
            assert_eq!(updated.banned, created.banned);
            assert_eq!(updated.experience, 100);
            assert_eq!(updated.level, 1);
            assert_eq!(updated.until_next_level, 200);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_update_without_experience_keeps_derived_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let created = seed_player(txn, "Gruk", 5000).await?;
            assert_eq!(created.level, 9);

            let updated = PlayersService
                .update(
                    txn,
                    created.id,
                    UpdatePlayer {
                        name: Some("Grukk".to_string()),
                        race: Some(Race::Orc),
                        profession: Some(Profession::Rogue),
                        banned: Some(true),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(updated.name, "Grukk");
            assert_eq!(updated.race, Race::Orc);
            assert_eq!(updated.profession, Profession::Rogue);
            assert!(updated.banned);
            assert_eq!(updated.experience, 5000);
            assert_eq!(updated.level, created.level);
            assert_eq!(updated.until_next_level, created.until_next_level);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_update_rejects_invalid_fields_without_writing() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let created = seed_player(txn, "Tilda", 250).await?;

            let err = PlayersService
                .update(
                    txn,
                    created.id,
                    UpdatePlayer {
                        name: Some("x".repeat(13)),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));

            let err = PlayersService
                .update(
                    txn,
                    created.id,
                    UpdatePlayer {
                        experience: Some(-1),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));

            // The stored record is untouched
            let refetched = PlayersService.get_by_id(txn, created.id).await?;
            assert_eq!(refetched, created);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_update_missing_player_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let err = PlayersService
                .update(
                    txn,
                    99_999,
                    UpdatePlayer {
                        banned: Some(true),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::NotFound(NotFoundKind::Player, _)
            ));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_delete_checks_id_then_existence_then_removes() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let err = PlayersService.delete(txn, 0).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));

            let err = PlayersService.delete(txn, 12_345).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::NotFound(NotFoundKind::Player, _)
            ));

            let created = seed_player(txn, "Morgrim", 1_000_000).await?;
            PlayersService.delete(txn, created.id).await?;

            let err = PlayersService.get_by_id(txn, created.id).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::NotFound(NotFoundKind::Player, _)
            ));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
