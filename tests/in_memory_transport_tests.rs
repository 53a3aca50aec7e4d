use seabattle::{
    CodecError, Grid, InMemoryTransport, Outcome, Transport, GUEST_TOKEN, HOST_TOKEN,
};

#[tokio::test(flavor = "multi_thread")]
async fn typed_messages_cross_the_pipe() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();

    let peer = tokio::spawn(async move {
        let token = b.recv_token().await.unwrap();
        assert_eq!(token, GUEST_TOKEN.to_vec());
        b.send_token(&HOST_TOKEN).await.unwrap();

        let (x, y) = b.recv_coord().await.unwrap();
        assert_eq!((x, y), (9, 4));
        b.send_outcome(Outcome::Destroyed).await.unwrap();

        let grid = b.recv_grid(3, 2).await.unwrap();
        assert!(grid.get(1, 1).unwrap().has_ship());
    });

    a.send_token(&GUEST_TOKEN).await?;
    assert_eq!(a.recv_token().await?, HOST_TOKEN.to_vec());
    a.send_coord(9, 4).await?;
    assert_eq!(a.recv_outcome().await?, Outcome::Destroyed);

    let mut grid = Grid::new(3, 2);
    grid.place_ship(1, 1, 2, 1)?;
    a.send_grid(&grid).await?;

    peer.await?;
    Ok(())
}

#[tokio::test]
async fn bytes_arrive_in_order() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send(&[1, 2, 3]).await?;
    a.send(&[4]).await?;
    assert_eq!(b.recv(2).await?, vec![1, 2]);
    assert_eq!(b.recv(2).await?, vec![3, 4]);
    Ok(())
}

#[tokio::test]
async fn peer_dropped_mid_message() {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send(&[5]).await.unwrap();
    drop(a);
    let err = b.recv_coord().await.unwrap_err();
    assert!(err.to_string().contains("Connection closed by peer"));
}

#[tokio::test]
async fn send_to_dropped_peer_fails() {
    let (mut a, b) = InMemoryTransport::pair();
    drop(b);
    assert!(a.send_outcome(Outcome::Miss).await.is_err());
}

#[tokio::test]
async fn zero_coordinate_byte_is_a_framing_violation() {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send(&[0, 3]).await.unwrap();
    let err = b.recv_coord().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<CodecError>(),
        Some(&CodecError::CoordinateOutOfRange { x: 0, y: 3 })
    );
}

#[tokio::test]
async fn unknown_outcome_byte() {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send(&[16]).await.unwrap();
    let err = b.recv_outcome().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<CodecError>(),
        Some(&CodecError::UnknownOutcome(16))
    );
}

#[tokio::test]
async fn grid_of_unexpected_size() {
    let (mut a, mut b) = InMemoryTransport::pair();
    // six bytes, read as a 2x2 grid, but the header says 4x1
    a.send(&[4, 1, 1, 1, 1, 1]).await.unwrap();
    assert!(b.recv_grid(2, 2).await.is_err());
}
