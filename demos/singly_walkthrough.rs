use linklists::SinglyLinkedList;

// cargo run --example singly_walkthrough
fn main() {
    let mut list = SinglyLinkedList::new();

    list.push_front(10);
    list.push_front(20);
    list.push_front(30);
    println!("{}", list); // 30 -> 20 -> 10

    list.push_back(40);
    println!("{}", list); // 30 -> 20 -> 10 -> 40

    list.insert(2, 50).unwrap();
    println!("{}", list); // 30 -> 20 -> 50 -> 10 -> 40

    list.pop_front().unwrap();
    println!("{}", list); // 20 -> 50 -> 10 -> 40

    list.pop_back().unwrap();
    println!("{}", list); // 20 -> 50 -> 10

    list.remove(1).unwrap();
    println!("{}", list); // 20 -> 10

    list.reverse();
    println!("{}", list); // 10 -> 20

    list.clear();
    for v in [1, 2, 3, 4] {
        list.push_back(v);
    }

    if list.has_cycle() {
        println!("Cycle detected!");
    } else {
        println!("No cycle");
    }
}
